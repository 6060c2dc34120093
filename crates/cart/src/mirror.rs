use crate::error::CartError;
use serde::{Deserialize, Serialize};
use shared::model::{Size, Tshirt};

/// One pending line in the cart. `max_quantity` is the catalog stock at
/// last sync; it caps what the user can add before the server is asked.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub tshirt_id: i32,
    pub design_name: String,
    pub size: Size,
    pub color: String,
    pub price: i32,
    pub quantity: i32,
    pub max_quantity: i32,
}

/// Local projection of catalog stock plus the user's pending cart.
#[derive(Debug, Default, Clone)]
pub struct CartMirror {
    catalog: Vec<Tshirt>,
    lines: Vec<CartLine>,
}

impl CartMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog snapshot with freshly fetched server state.
    /// Existing lines are clamped to the new stock; lines whose item
    /// vanished, or whose clamp reaches zero, are dropped.
    pub fn sync(&mut self, catalog: Vec<Tshirt>) {
        self.lines.retain_mut(|line| {
            let Some(item) = catalog.iter().find(|t| t.id == line.tshirt_id) else {
                return false;
            };

            line.max_quantity = item.quantity;
            line.quantity = line.quantity.min(item.quantity);
            line.quantity > 0
        });

        self.catalog = catalog;
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_price(&self) -> i32 {
        self.lines.iter().map(|l| l.price * l.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Adds one unit of the item, creating the line if absent. Rejects with
    /// `OutOfStock` once the cart has claimed all locally known stock.
    pub fn add(&mut self, tshirt_id: i32) -> Result<&CartLine, CartError> {
        let item = self
            .catalog
            .iter()
            .find(|t| t.id == tshirt_id)
            .ok_or(CartError::UnknownItem)?;

        let in_cart = self
            .lines
            .iter()
            .find(|l| l.tshirt_id == tshirt_id)
            .map(|l| l.quantity)
            .unwrap_or(0);

        let available = item.quantity - in_cart;
        if available <= 0 {
            return Err(CartError::OutOfStock { available: 0 });
        }

        let index = match self.lines.iter().position(|l| l.tshirt_id == tshirt_id) {
            Some(index) => {
                self.lines[index].quantity += 1;
                index
            }
            None => {
                self.lines.push(CartLine {
                    tshirt_id: item.id,
                    design_name: item.design_name.clone(),
                    size: item.size,
                    color: item.color.clone(),
                    price: item.price,
                    quantity: 1,
                    max_quantity: item.quantity,
                });
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Adjusts a line by `delta`; dropping to zero or below removes it.
    pub fn update(&mut self, tshirt_id: i32, delta: i32) -> Result<(), CartError> {
        let current = self
            .lines
            .iter()
            .find(|l| l.tshirt_id == tshirt_id)
            .map(|l| l.quantity)
            .ok_or(CartError::UnknownItem)?;

        self.set_quantity(tshirt_id, current + delta)
    }

    /// Sets a line to an absolute quantity. Zero or below removes the line;
    /// anything past the locally known stock is rejected with the maximum.
    pub fn set_quantity(&mut self, tshirt_id: i32, quantity: i32) -> Result<(), CartError> {
        if quantity <= 0 {
            self.lines.retain(|l| l.tshirt_id != tshirt_id);
            return Ok(());
        }

        let item = self
            .catalog
            .iter()
            .find(|t| t.id == tshirt_id)
            .ok_or(CartError::UnknownItem)?;

        if quantity > item.quantity {
            return Err(CartError::OutOfStock {
                available: item.quantity,
            });
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.tshirt_id == tshirt_id)
            .ok_or(CartError::UnknownItem)?;

        line.quantity = quantity;
        Ok(())
    }
}
