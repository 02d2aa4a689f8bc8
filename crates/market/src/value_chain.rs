//! Value-chain directory
//!
//! Buyers, input suppliers, logistics providers, produce listings, and group
//! procurement. The provider trait is the seam for a real marketplace
//! backend; [`StubValueChainDirectory`] serves curated demo data with the
//! same shapes.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::MarketError;

/// Identity of the farmer making a request, from the enclosing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerIdentity {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub id: u64,
    pub name: String,
    /// "trader", "processor" or "exporter"
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub contact: String,
    pub phone: String,
    pub preferred_crops: Vec<String>,
    /// Offered price band per quintal
    pub price_range: (f64, f64),
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSupplier {
    pub id: u64,
    pub name: String,
    /// "fertilizer", "seed" or "pesticide"
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub contact: String,
    pub phone: String,
    pub products: Vec<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticsProvider {
    pub id: u64,
    pub name: String,
    /// "transport", "warehousing" or "financial"
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub contact: String,
    pub phone: String,
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketListing {
    pub listing_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<u64>,
    pub farmer_name: String,
    pub crop: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub connection_id: String,
    pub listing_id: String,
    pub buyer_id: String,
    pub farmer_id: u64,
    pub status: String,
    pub created_at: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupProcurement {
    pub group_id: String,
    pub organizer_id: u64,
    pub organizer_name: String,
    pub crop: String,
    pub quantity: f64,
    pub members: Vec<u64>,
    pub status: String,
    pub created_at: String,
    pub expires_at: String,
}

/// Listing-style summary of an open procurement group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group_id: String,
    pub organizer_name: String,
    /// Input being procured, e.g. "fertilizer"
    pub crop: String,
    pub quantity: f64,
    pub members: u32,
    pub location: String,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinReceipt {
    pub group_id: String,
    pub user_id: u64,
    pub status: String,
    pub message: String,
}

/// Optional filters for listing queries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFilter {
    pub crop: Option<String>,
    pub state: Option<String>,
}

/// Marketplace backend seam
#[async_trait]
pub trait ValueChainProvider: Send + Sync {
    async fn buyers(
        &self,
        crop: &str,
        state: &str,
        district: Option<&str>,
    ) -> Result<Vec<Buyer>, MarketError>;

    async fn input_suppliers(
        &self,
        crop: &str,
        state: &str,
        district: Option<&str>,
    ) -> Result<Vec<InputSupplier>, MarketError>;

    async fn logistics_providers(
        &self,
        state: &str,
        district: Option<&str>,
    ) -> Result<Vec<LogisticsProvider>, MarketError>;

    async fn market_listings(&self, filter: &ListingFilter)
        -> Result<Vec<MarketListing>, MarketError>;

    async fn create_market_listing(
        &self,
        farmer: &FarmerIdentity,
        crop: &str,
        quantity: f64,
        price: f64,
    ) -> Result<MarketListing, MarketError>;

    async fn connect_with_buyer(
        &self,
        listing_id: &str,
        buyer_id: &str,
        farmer: &FarmerIdentity,
    ) -> Result<Connection, MarketError>;

    async fn group_procurements(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<GroupSummary>, MarketError>;

    async fn create_group_procurement(
        &self,
        organizer: &FarmerIdentity,
        crop: &str,
        quantity: f64,
    ) -> Result<GroupProcurement, MarketError>;

    async fn join_group_procurement(
        &self,
        group_id: &str,
        user: &FarmerIdentity,
    ) -> Result<JoinReceipt, MarketError>;
}

/// Id prefixed with a UTC second-resolution stamp, e.g. "LIST_20260831120000"
fn stamped_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Utc::now().format("%Y%m%d%H%M%S"))
}

/// Demo directory with curated contacts and mock transactions
#[derive(Debug, Clone, Default)]
pub struct StubValueChainDirectory;

impl StubValueChainDirectory {
    fn all_buyers() -> Vec<Buyer> {
        vec![
            Buyer {
                id: 1,
                name: "ABC Traders".to_string(),
                kind: "trader".to_string(),
                location: "Delhi".to_string(),
                contact: "contact@abctraders.com".to_string(),
                phone: "+91-9876543210".to_string(),
                preferred_crops: vec!["wheat".to_string(), "rice".to_string(), "maize".to_string()],
                price_range: (2000.0, 2200.0),
                rating: 4.5,
            },
            Buyer {
                id: 2,
                name: "XYZ Foods".to_string(),
                kind: "processor".to_string(),
                location: "Mumbai".to_string(),
                contact: "contact@xyzfoods.com".to_string(),
                phone: "+91-9876543211".to_string(),
                preferred_crops: vec!["rice".to_string(), "sugarcane".to_string()],
                price_range: (2100.0, 2300.0),
                rating: 4.2,
            },
            Buyer {
                id: 3,
                name: "Agri Exports Ltd".to_string(),
                kind: "exporter".to_string(),
                location: "Chennai".to_string(),
                contact: "contact@agriexports.com".to_string(),
                phone: "+91-9876543212".to_string(),
                preferred_crops: vec!["rice".to_string(), "cotton".to_string()],
                price_range: (2200.0, 2500.0),
                rating: 4.7,
            },
        ]
    }

    fn all_suppliers() -> Vec<InputSupplier> {
        vec![
            InputSupplier {
                id: 1,
                name: "Green Inputs".to_string(),
                kind: "fertilizer".to_string(),
                location: "Delhi".to_string(),
                contact: "contact@greeninputs.com".to_string(),
                phone: "+91-9876543210".to_string(),
                products: vec!["urea".to_string(), "dap".to_string(), "npk".to_string()],
                rating: 4.3,
            },
            InputSupplier {
                id: 2,
                name: "Seeds Co".to_string(),
                kind: "seed".to_string(),
                location: "Punjab".to_string(),
                contact: "contact@seedsco.com".to_string(),
                phone: "+91-9876543211".to_string(),
                products: vec!["wheat".to_string(), "rice".to_string(), "cotton".to_string()],
                rating: 4.6,
            },
            InputSupplier {
                id: 3,
                name: "Crop Protection".to_string(),
                kind: "pesticide".to_string(),
                location: "Gujarat".to_string(),
                contact: "contact@cropprotection.com".to_string(),
                phone: "+91-9876543212".to_string(),
                products: vec![
                    "insecticides".to_string(),
                    "fungicides".to_string(),
                    "herbicides".to_string(),
                ],
                rating: 4.4,
            },
        ]
    }

    fn all_logistics() -> Vec<LogisticsProvider> {
        vec![
            LogisticsProvider {
                id: 1,
                name: "Fast Transport".to_string(),
                kind: "transport".to_string(),
                location: "Delhi".to_string(),
                contact: "contact@fasttransport.com".to_string(),
                phone: "+91-9876543210".to_string(),
                services: vec!["truck".to_string(), "tempo".to_string(), "tractor".to_string()],
                coverage: Some(vec!["Delhi".to_string(), "NCR".to_string()]),
                capacity: None,
                rating: 4.2,
            },
            LogisticsProvider {
                id: 2,
                name: "Cold Storage".to_string(),
                kind: "warehousing".to_string(),
                location: "Mumbai".to_string(),
                contact: "contact@coldstorage.com".to_string(),
                phone: "+91-9555174289".to_string(),
                services: vec!["cold storage".to_string(), "dry storage".to_string()],
                coverage: None,
                capacity: Some("1000 tons".to_string()),
                rating: 4.5,
            },
            LogisticsProvider {
                id: 3,
                name: "Agri Finance".to_string(),
                kind: "financial".to_string(),
                location: "Bangalore".to_string(),
                contact: "contact@agrifinance.com".to_string(),
                phone: "+91-9876543212".to_string(),
                services: vec![
                    "crop loan".to_string(),
                    "equipment loan".to_string(),
                    "insurance".to_string(),
                ],
                coverage: None,
                capacity: None,
                rating: 4.4,
            },
        ]
    }

    fn all_listings() -> Vec<MarketListing> {
        let listing = |id: &str, farmer: &str, crop: &str, qty: f64, price: f64, loc: &str, at: &str| {
            MarketListing {
                listing_id: id.to_string(),
                farmer_id: None,
                farmer_name: farmer.to_string(),
                crop: crop.to_string(),
                quantity: qty,
                price,
                location: Some(loc.to_string()),
                status: "active".to_string(),
                created_at: at.to_string(),
                expires_at: None,
            }
        };
        vec![
            listing("LIST_20230101120000", "Ram Singh", "wheat", 50.0, 2100.0, "Delhi", "2023-01-01T12:00:00"),
            listing("LIST_20230102120000", "Lakshmi Devi", "rice", 30.0, 3500.0, "Kolkata", "2023-01-02T12:00:00"),
            listing("LIST_20230103120000", "Rajesh Kumar", "cotton", 20.0, 5800.0, "Mumbai", "2023-01-03T12:00:00"),
        ]
    }

    fn all_groups() -> Vec<GroupSummary> {
        let group = |id: &str, organizer: &str, crop: &str, qty: f64, members: u32, loc: &str, at: &str| {
            GroupSummary {
                group_id: id.to_string(),
                organizer_name: organizer.to_string(),
                crop: crop.to_string(),
                quantity: qty,
                members,
                location: loc.to_string(),
                created_at: at.to_string(),
                status: "open".to_string(),
            }
        };
        vec![
            group("GROUP_20230101120000", "Ram Singh", "fertilizer", 100.0, 5, "Delhi", "2023-01-01T12:00:00"),
            group("GROUP_20230102120000", "Lakshmi Devi", "seeds", 50.0, 3, "Kolkata", "2023-01-02T12:00:00"),
            group("GROUP_20230103120000", "Rajesh Kumar", "pesticides", 30.0, 7, "Mumbai", "2023-01-03T12:00:00"),
        ]
    }
}

#[async_trait]
impl ValueChainProvider for StubValueChainDirectory {
    async fn buyers(
        &self,
        crop: &str,
        _state: &str,
        _district: Option<&str>,
    ) -> Result<Vec<Buyer>, MarketError> {
        Ok(Self::all_buyers()
            .into_iter()
            .filter(|b| b.preferred_crops.iter().any(|c| c.eq_ignore_ascii_case(crop)))
            .collect())
    }

    async fn input_suppliers(
        &self,
        _crop: &str,
        _state: &str,
        _district: Option<&str>,
    ) -> Result<Vec<InputSupplier>, MarketError> {
        Ok(Self::all_suppliers())
    }

    async fn logistics_providers(
        &self,
        _state: &str,
        _district: Option<&str>,
    ) -> Result<Vec<LogisticsProvider>, MarketError> {
        Ok(Self::all_logistics())
    }

    async fn market_listings(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<MarketListing>, MarketError> {
        let mut listings = Self::all_listings();
        if let Some(crop) = &filter.crop {
            listings.retain(|l| l.crop == *crop);
        }
        if let Some(state) = &filter.state {
            listings.retain(|l| l.location.as_deref() == Some(state.as_str()));
        }
        Ok(listings)
    }

    async fn create_market_listing(
        &self,
        farmer: &FarmerIdentity,
        crop: &str,
        quantity: f64,
        price: f64,
    ) -> Result<MarketListing, MarketError> {
        let now = Utc::now();
        Ok(MarketListing {
            listing_id: stamped_id("LIST"),
            farmer_id: Some(farmer.id),
            farmer_name: farmer.name.clone(),
            crop: crop.to_string(),
            quantity,
            price,
            location: None,
            status: "active".to_string(),
            created_at: now.to_rfc3339(),
            expires_at: Some((now + Duration::days(7)).to_rfc3339()),
        })
    }

    async fn connect_with_buyer(
        &self,
        listing_id: &str,
        buyer_id: &str,
        farmer: &FarmerIdentity,
    ) -> Result<Connection, MarketError> {
        Ok(Connection {
            connection_id: stamped_id("CONN"),
            listing_id: listing_id.to_string(),
            buyer_id: buyer_id.to_string(),
            farmer_id: farmer.id,
            status: "pending".to_string(),
            created_at: Utc::now().to_rfc3339(),
            message: "Connection request sent. Waiting for buyer response.".to_string(),
        })
    }

    async fn group_procurements(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<GroupSummary>, MarketError> {
        let mut groups = Self::all_groups();
        if let Some(crop) = &filter.crop {
            groups.retain(|g| g.crop == *crop);
        }
        if let Some(state) = &filter.state {
            groups.retain(|g| g.location == *state);
        }
        Ok(groups)
    }

    async fn create_group_procurement(
        &self,
        organizer: &FarmerIdentity,
        crop: &str,
        quantity: f64,
    ) -> Result<GroupProcurement, MarketError> {
        let now = Utc::now();
        Ok(GroupProcurement {
            group_id: stamped_id("GROUP"),
            organizer_id: organizer.id,
            organizer_name: organizer.name.clone(),
            crop: crop.to_string(),
            quantity,
            members: vec![organizer.id],
            status: "open".to_string(),
            created_at: now.to_rfc3339(),
            expires_at: (now + Duration::days(3)).to_rfc3339(),
        })
    }

    async fn join_group_procurement(
        &self,
        group_id: &str,
        user: &FarmerIdentity,
    ) -> Result<JoinReceipt, MarketError> {
        Ok(JoinReceipt {
            group_id: group_id.to_string(),
            user_id: user.id,
            status: "joined".to_string(),
            message: "Successfully joined the group procurement.".to_string(),
        })
    }
}
