use super::InventoryService;
use crate::config::Config;
use crate::domain::{FoodItem, DEFAULT_PRICE};

/// Conversion factors used to turn saved items into impact figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactFactors {
    pub default_price: f64,
    pub co2_per_item_kg: f64,
    pub water_per_item_l: f64,
    pub co2_per_km: f64,
}

impl Default for ImpactFactors {
    fn default() -> Self {
        Self {
            default_price: DEFAULT_PRICE,
            co2_per_item_kg: 2.5,
            water_per_item_l: 170.0,
            co2_per_km: 2.3,
        }
    }
}

impl From<&Config> for ImpactFactors {
    fn from(config: &Config) -> Self {
        Self {
            default_price: config.default_price,
            co2_per_item_kg: config.co2_per_item_kg,
            water_per_item_l: config.water_per_item_l,
            co2_per_km: config.co2_per_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactStats {
    pub total_items: usize,
    pub items_saved: usize,
    pub items_wasted: usize,
    pub money_saved: f64,
    pub co2_saved_kg: f64,
    pub water_saved_l: f64,
    pub km_not_driven: u64,
    pub save_rate: u32,
}

pub struct StatsService;

impl StatsService {
    pub fn summarize(items: &[FoodItem], factors: &ImpactFactors) -> ImpactStats {
        let used = InventoryService::used(items);
        let items_saved = used.len();
        let items_wasted = InventoryService::wasted(items).len();
        let money_saved: f64 = used
            .iter()
            .map(|item| item.effective_price(factors.default_price))
            .sum();
        let co2_saved_kg = items_saved as f64 * factors.co2_per_item_kg;
        let water_saved_l = items_saved as f64 * factors.water_per_item_l;
        let km_not_driven = if factors.co2_per_km > 0.0 {
            (co2_saved_kg / factors.co2_per_km).round() as u64
        } else {
            0
        };

        ImpactStats {
            total_items: items.len(),
            items_saved,
            items_wasted,
            money_saved,
            co2_saved_kg,
            water_saved_l,
            km_not_driven,
            save_rate: save_rate(items_saved, items.len()),
        }
    }
}

/// Share of logged items that were used; an inventory with nothing used yet reports 100%.
pub fn save_rate(used: usize, total: usize) -> u32 {
    if used == 0 || total == 0 {
        return 100;
    }
    ((used as f64 / total as f64) * 100.0).round() as u32
}
