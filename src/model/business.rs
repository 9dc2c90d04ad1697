use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Currencies a business can price its menu in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Nok,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Nok];

    /// ISO 4217 code as stored in the database.
    pub fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Nok => "NOK",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Nok => "kr",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Eur => "Euro",
            Self::Usd => "US Dollar",
            Self::Nok => "Norwegian Krone",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Formats a price with two decimals, `kr` goes after the amount.
    pub fn format_price(self, price: f64) -> String {
        match self {
            Self::Nok => format!("{:.2} {}", price, self.symbol()),
            _ => format!("{}{:.2}", self.symbol(), price),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind of business, drives the public menu's hero image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[default]
    Restaurant,
    Bar,
    Barber,
}

impl BusinessType {
    pub const ALL: [BusinessType; 3] = [
        BusinessType::Restaurant,
        BusinessType::Bar,
        BusinessType::Barber,
    ];

    /// Tag as stored in the database.
    pub fn id(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Bar => "bar",
            Self::Barber => "barber",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Bar => "Bar",
            Self::Barber => "Barber",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Restaurant => "Food service establishment",
            Self::Bar => "Drinks and entertainment venue",
            Self::Barber => "Hair styling and grooming services",
        }
    }

    pub fn hero_image(self) -> &'static str {
        match self {
            Self::Restaurant => "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&w=2070&q=80",
            Self::Bar => "https://images.unsplash.com/photo-1514933651103-005eec06c04b?auto=format&fit=crop&w=2074&q=80",
            Self::Barber => "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?auto=format&fit=crop&w=2070&q=80",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BusinessDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub alias: String,
    pub currency: Currency,
    pub business_type: BusinessType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating a business, the alias is derived from the name.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateBusinessDto {
    pub name: String,
    pub business_type: BusinessType,
}

/// Request body for the business settings form.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateBusinessDto {
    pub name: String,
    pub alias: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency: Currency,
    pub business_type: BusinessType,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TransferBusinessDto {
    /// Account that becomes the new owner
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::{BusinessType, Currency};

    #[test]
    fn formats_prices_with_two_decimals() {
        assert_eq!(Currency::Eur.format_price(12.5), "€12.50");
        assert_eq!(Currency::Usd.format_price(3.0), "$3.00");
        assert_eq!(Currency::Nok.format_price(149.0), "149.00 kr");
    }

    #[test]
    fn parses_stored_codes() {
        assert_eq!(Currency::from_code("NOK"), Some(Currency::Nok));
        assert_eq!(Currency::from_code("nok"), None);
        assert_eq!(BusinessType::from_id("barber"), Some(BusinessType::Barber));
        assert_eq!(BusinessType::from_id("cafe"), None);
    }

    #[test]
    fn serializes_as_stored_codes() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(
            serde_json::to_string(&BusinessType::Bar).unwrap(),
            "\"bar\""
        );
    }
}
