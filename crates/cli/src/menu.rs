use core::str::FromStr;

pub const MENU: &str = "\nInventory Management System
1. Add Product
2. Remove Product
3. Update Product
4. List Products
5. Get Total Value
6. Exit";

pub const INVALID_OPTION: &str = "Invalid option. Please choose from 1 to 6.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    Remove,
    Update,
    List,
    TotalValue,
    Exit,
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(MenuOption::Add),
            Ok(2) => Ok(MenuOption::Remove),
            Ok(3) => Ok(MenuOption::Update),
            Ok(4) => Ok(MenuOption::List),
            Ok(5) => Ok(MenuOption::TotalValue),
            Ok(6) => Ok(MenuOption::Exit),
            _ => Err(format!("not a menu option: {s:?}")),
        }
    }
}
