//! Order-picking instance record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InstanceError;

/// An order-picking problem instance as exchanged in JSON.
///
/// Item ids index into `product_locations` and `product_categories`; picker
/// ids index into `order_picker_categories`. The last row and column of the
/// travel-time matrix belong to the depot.
///
/// # Examples
///
/// ```
/// use u_picking::models::Instance;
///
/// let json = r#"{
///     "amountOrderPickers": 2,
///     "capacity": 2,
///     "maxTimePerRound": 60,
///     "amountWarehouses": 2,
///     "productLocations": [0, 1],
///     "travelTimeMatrix": [[999, 1, 1], [1, 999, 1], [1, 1, 999]],
///     "items": [0, 1],
///     "maxRoundsPerOrderPicker": 2
/// }"#;
/// let instance = Instance::from_json_str(json).unwrap();
/// assert_eq!(instance.capacity, 2);
/// assert!(instance.categories.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Upper bound on the number of pickers.
    pub amount_order_pickers: usize,
    /// Maximum number of items per route.
    pub capacity: usize,
    /// Maximum cumulative route time per picker.
    pub max_time_per_round: f64,
    /// Number of storage locations (bookkeeping only).
    pub amount_warehouses: usize,
    /// Item id → location index.
    pub product_locations: Vec<usize>,
    /// Square matrix of size locations + 1; the last index is the depot.
    pub travel_time_matrix: Vec<Vec<f64>>,
    /// Items that must be collected.
    pub items: Vec<usize>,
    /// Maximum rounds per picker (bookkeeping only).
    pub max_rounds_per_order_picker: usize,
    /// Declared categories; empty when the instance has no category constraints.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Item id → category, `None` for uncategorised items.
    #[serde(default)]
    pub product_categories: Vec<Option<String>>,
    /// Picker id → category, `None` for pickers that may pick anything.
    #[serde(default)]
    pub order_picker_categories: Vec<Option<String>>,
}

impl Instance {
    /// Parses an instance from a JSON string and validates its structure.
    pub fn from_json_str(json: &str) -> Result<Self, InstanceError> {
        let instance: Instance = serde_json::from_str(json)?;
        instance.validate()?;
        Ok(instance)
    }

    /// Reads and parses an instance from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InstanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks the structural invariants the solver relies on.
    pub fn validate(&self) -> Result<(), InstanceError> {
        if self.capacity == 0 {
            return Err(InstanceError::ZeroCapacity);
        }
        if !self.max_time_per_round.is_finite() || self.max_time_per_round < 0.0 {
            return Err(InstanceError::InvalidMaxTime(self.max_time_per_round));
        }

        let size = self.travel_time_matrix.len();
        if size == 0 {
            return Err(InstanceError::EmptyMatrix);
        }
        if let Some((row, r)) = self
            .travel_time_matrix
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != size)
        {
            return Err(InstanceError::NonSquareMatrix {
                row,
                len: r.len(),
                expected: size,
            });
        }

        for &item in &self.items {
            let location = *self
                .product_locations
                .get(item)
                .ok_or(InstanceError::MissingLocation { item })?;
            if location >= size {
                return Err(InstanceError::LocationOutOfRange {
                    item,
                    location,
                    size,
                });
            }
        }
        Ok(())
    }

    /// Returns `true` if the instance declares category constraints.
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
            && !self.order_picker_categories.is_empty()
            && !self.product_categories.is_empty()
    }
}
