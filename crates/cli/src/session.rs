//! Interactive menu loop driving an [`InventoryStore`].

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use stockkeep_core::{DomainError, ProductId};
use stockkeep_inventory::{InventoryStore, Product};

use crate::config::CliConfig;
use crate::console::Console;
use crate::error::CliError;
use crate::ids::next_product_id;
use crate::menu::{INVALID_OPTION, MENU, MenuOption};
use crate::table;

type Step = Result<ControlFlow<()>, CliError>;

/// One run of the menu loop, from first prompt to exit or end of input.
pub struct Session<R, W> {
    console: Console<R, W>,
    store: InventoryStore,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: CliConfig) -> Self {
        Self::with_store(input, output, config, InventoryStore::new())
    }

    pub fn with_store(input: R, output: W, config: CliConfig, store: InventoryStore) -> Self {
        Self {
            console: Console::new(input, output),
            store,
            config,
        }
    }

    pub fn into_parts(self) -> (InventoryStore, W) {
        let (_, output) = self.console.into_inner();
        (self.store, output)
    }

    /// Run until the user exits or input ends. Only console I/O errors abort.
    pub fn run(&mut self) -> Result<(), CliError> {
        info!("inventory session started");
        loop {
            self.console.say(MENU)?;
            let Some(line) = self.console.read_line()? else {
                debug!("input closed at menu");
                break;
            };

            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(e) => {
                    debug!(error = %e, "rejected menu input");
                    self.console.say(INVALID_OPTION)?;
                    continue;
                }
            };
            debug!(?option, "menu option selected");

            if self.dispatch(option)?.is_break() {
                break;
            }
        }
        info!(products = self.store.len(), "inventory session finished");
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Step {
        match option {
            MenuOption::Add => self.add_product(),
            MenuOption::Remove => self.remove_product(),
            MenuOption::Update => self.update_product(),
            MenuOption::List => self.list_products(),
            MenuOption::TotalValue => self.show_total_value(),
            MenuOption::Exit => Ok(ControlFlow::Break(())),
        }
    }

    fn add_product(&mut self) -> Step {
        let id = match next_product_id(&self.store) {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "cannot assign product id");
                self.console.say(format!("Error: {e}"))?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        let Some(name) = self.console.prompt_until(
            "Enter Product Name: ",
            "Error: Product name cannot be empty.",
            |s| (!s.is_empty()).then(|| s.to_string()),
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(quantity) = self.console.prompt_until(
            "Enter Quantity in Stock: ",
            "Error: Quantity must be a non-negative integer.",
            parse_quantity,
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(price) = self.console.prompt_until(
            "Enter Price: ",
            "Error: Price must be a non-negative number.",
            parse_price,
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };

        match self.store.add(Product::new(id, name.clone(), quantity, price)) {
            Ok(()) => {
                info!(product_id = %id, %name, quantity, price, "product added");
                self.console
                    .say(format!("New {name} has been added successfully."))?;
            }
            Err(e) => {
                warn!(product_id = %id, error = %e, "product rejected");
                let duplicate = self.store.exists(id);
                self.console.say(add_rejection(&e, duplicate))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn remove_product(&mut self) -> Step {
        let Some(id) = self.console.prompt_until(
            "Enter Product ID: ",
            "Invalid input. Please enter a valid number.",
            |s| s.parse::<ProductId>().ok(),
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };

        match self.store.remove(id) {
            Ok(product) => {
                info!(product_id = %id, name = product.name(), "product removed");
                self.console
                    .say(format!("Product with ID {id} has been removed successfully."))?;
            }
            Err(e) => {
                warn!(product_id = %id, error = %e, "remove failed");
                self.report(&e, "Product with the specified ID not found.")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn update_product(&mut self) -> Step {
        let Some(id) = self.console.prompt_until(
            "Enter Product ID to Update: ",
            "Error: Product ID must be a positive integer.",
            |s| s.parse::<ProductId>().ok().filter(|id| id.is_valid()),
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(quantity) = self.console.prompt_until(
            "Enter New Quantity: ",
            "Error: Quantity cannot be negative.",
            parse_quantity,
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };

        match self.store.update_quantity(id, quantity) {
            Ok(()) => {
                info!(product_id = %id, quantity, "quantity updated");
                self.console
                    .say(format!("Product with ID {id} has been updated successfully."))?;
            }
            Err(e) => {
                warn!(product_id = %id, error = %e, "update failed");
                self.report(&e, "Product not found.")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list_products(&mut self) -> Step {
        debug!(products = self.store.len(), "listing products");
        let rendered = table::render(self.store.list());
        self.console.say(rendered)?;
        Ok(ControlFlow::Continue(()))
    }

    fn show_total_value(&mut self) -> Step {
        let total = self.store.total_value();
        debug!(total, "total value computed");
        let money = table::format_money(&self.config.currency_symbol, total);
        self.console.say(format!("Total Value: {money}"))?;
        Ok(ControlFlow::Continue(()))
    }

    fn report(&mut self, error: &DomainError, not_found: &str) -> Result<(), CliError> {
        match error {
            DomainError::NotFound(_) => self.console.say(not_found),
            DomainError::Validation(_) => self.console.say(format!("Error: {error}")),
        }
    }
}

fn add_rejection(error: &DomainError, duplicate: bool) -> String {
    if duplicate {
        "Error: Product with the same ID already exists.".to_string()
    } else {
        format!("Error: {error}")
    }
}

fn parse_quantity(s: &str) -> Option<i64> {
    s.parse::<i64>().ok().filter(|q| *q >= 0)
}

fn parse_price(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}
