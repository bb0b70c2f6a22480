use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Deserialize, AsRefStr)]
pub enum Revenue {
    #[serde(rename = "Under $10K/month")]
    #[strum(serialize = "Under $10K/month")]
    Under10K,
    #[serde(rename = "$10K - $50K/month")]
    #[strum(serialize = "$10K - $50K/month")]
    From10KTo50K,
    #[serde(rename = "$50K - $100K/month")]
    #[strum(serialize = "$50K - $100K/month")]
    From50KTo100K,
    #[serde(rename = "$100K - $500K/month")]
    #[strum(serialize = "$100K - $500K/month")]
    From100KTo500K,
    #[serde(rename = "$500K+/month")]
    #[strum(serialize = "$500K+/month")]
    Over500K,
}

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Deserialize, AsRefStr)]
pub enum Platform {
    Amazon,
    Walmart,
    #[serde(rename = "eBay")]
    #[strum(serialize = "eBay")]
    Ebay,
    Shopify,
    Etsy,
    #[serde(rename = "TikTok Shop")]
    #[strum(serialize = "TikTok Shop")]
    TikTokShop,
    Multiple,
    Other,
}

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Deserialize, AsRefStr)]
pub enum Service {
    #[serde(rename = "Store Setup")]
    #[strum(serialize = "Store Setup")]
    StoreSetup,
    #[serde(rename = "PPC Management")]
    #[strum(serialize = "PPC Management")]
    PpcManagement,
    #[serde(rename = "Listing Optimization")]
    #[strum(serialize = "Listing Optimization")]
    ListingOptimization,
    #[serde(rename = "Account Management")]
    #[strum(serialize = "Account Management")]
    AccountManagement,
    #[serde(rename = "Brand Registry")]
    #[strum(serialize = "Brand Registry")]
    BrandRegistry,
    #[serde(rename = "Inventory Management")]
    #[strum(serialize = "Inventory Management")]
    InventoryManagement,
    #[serde(rename = "Marketplace Expansion")]
    #[strum(serialize = "Marketplace Expansion")]
    MarketplaceExpansion,
    #[serde(rename = "Creative & A+ Content")]
    #[strum(serialize = "Creative & A+ Content")]
    CreativeContent,
}
