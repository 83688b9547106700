use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{errors::FoodError, expiry};
use crate::domain::{FoodItem, FoodItemDraft, FoodStatus};

use super::{ServiceError, ServiceResult};

pub struct InventoryService;

impl InventoryService {
    /// Validates a draft and appends it as a new active item. Returns the new id.
    pub fn add(
        items: &mut Vec<FoodItem>,
        draft: FoodItemDraft,
        default_price: f64,
    ) -> ServiceResult<Uuid> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Item name cannot be empty".into()));
        }
        let price = draft
            .estimated_price
            .filter(|price| price.is_finite() && *price > 0.0)
            .unwrap_or(default_price);
        let item = FoodItem::new(name, draft.category, draft.expiry_date, price);
        let id = item.id;
        tracing::info!(%id, name, category = %item.category, "food item added");
        items.push(item);
        Ok(id)
    }

    pub fn mark_used(items: &mut [FoodItem], id: Uuid, today: NaiveDate) -> ServiceResult<()> {
        Self::retire(items, id, FoodStatus::Used, today)
    }

    pub fn mark_wasted(items: &mut [FoodItem], id: Uuid, today: NaiveDate) -> ServiceResult<()> {
        Self::retire(items, id, FoodStatus::Wasted, today)
    }

    pub fn active(items: &[FoodItem]) -> Vec<&FoodItem> {
        Self::with_status(items, FoodStatus::Active)
    }

    pub fn used(items: &[FoodItem]) -> Vec<&FoodItem> {
        Self::with_status(items, FoodStatus::Used)
    }

    pub fn wasted(items: &[FoodItem]) -> Vec<&FoodItem> {
        Self::with_status(items, FoodStatus::Wasted)
    }

    /// Active items expiring within two days, soonest first.
    pub fn urgent(items: &[FoodItem], today: NaiveDate) -> Vec<&FoodItem> {
        let mut urgent: Vec<&FoodItem> = items
            .iter()
            .filter(|item| item.is_active())
            .filter(|item| expiry::is_urgent(expiry::days_left(item.expiry_date, today)))
            .collect();
        urgent.sort_by_key(|item| expiry::days_left(item.expiry_date, today));
        urgent
    }

    /// Active items with more than two days left, in the order they were logged.
    pub fn fresh(items: &[FoodItem], today: NaiveDate) -> Vec<&FoodItem> {
        items
            .iter()
            .filter(|item| item.is_active())
            .filter(|item| !expiry::is_urgent(expiry::days_left(item.expiry_date, today)))
            .collect()
    }

    /// Listing shown on the home screen: urgent items, then fresh ones.
    pub fn home_listing(items: &[FoodItem], today: NaiveDate) -> Vec<&FoodItem> {
        let mut listing = Self::urgent(items, today);
        listing.extend(Self::fresh(items, today));
        listing
    }

    fn with_status(items: &[FoodItem], status: FoodStatus) -> Vec<&FoodItem> {
        items.iter().filter(|item| item.status == status).collect()
    }

    fn retire(
        items: &mut [FoodItem],
        id: Uuid,
        status: FoodStatus,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| FoodError::ItemNotFound(id.to_string()))?;
        if !item.is_active() {
            return Err(ServiceError::Invalid(format!(
                "`{}` is already marked {}",
                item.name, item.status
            )));
        }
        item.retire(status, today);
        tracing::info!(%id, name = %item.name, %status, "food item retired");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FoodCategory, DEFAULT_PRICE};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pantry() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Milk", FoodCategory::Dairy, date(2025, 5, 31), 12.0),
            FoodItem::new("Spinach", FoodCategory::Vegetables, date(2025, 5, 28), 8.0),
            FoodItem::new("Chicken", FoodCategory::Meat, date(2025, 5, 29), 35.0),
            FoodItem::new("Bread", FoodCategory::Grains, date(2025, 6, 2), 10.0),
        ]
    }

    #[test]
    fn add_defaults_missing_or_invalid_price() {
        let mut items = Vec::new();
        let draft = FoodItemDraft::new("  Yogurt ", FoodCategory::Dairy, date(2025, 6, 1));
        let id = InventoryService::add(&mut items, draft.clone(), DEFAULT_PRICE).unwrap();
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].name, "Yogurt");
        assert_eq!(items[0].estimated_price, 15.0);
        assert!(items[0].is_active());

        InventoryService::add(&mut items, draft.clone().with_price(-3.0), DEFAULT_PRICE).unwrap();
        assert_eq!(items[1].estimated_price, 15.0);

        InventoryService::add(&mut items, draft.with_price(4.5), DEFAULT_PRICE).unwrap();
        assert_eq!(items[2].estimated_price, 4.5);
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut items = Vec::new();
        let draft = FoodItemDraft::new("   ", FoodCategory::Other, date(2025, 6, 1));
        let err = InventoryService::add(&mut items, draft, DEFAULT_PRICE).unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert!(items.is_empty());
    }

    #[test]
    fn mark_used_and_wasted_set_status_and_date() {
        let mut items = pantry();
        let today = date(2025, 5, 29);
        let milk = items[0].id;
        let spinach = items[1].id;
        InventoryService::mark_used(&mut items, milk, today).unwrap();
        InventoryService::mark_wasted(&mut items, spinach, today).unwrap();

        assert_eq!(InventoryService::used(&items).len(), 1);
        assert_eq!(InventoryService::wasted(&items).len(), 1);
        assert_eq!(InventoryService::active(&items).len(), 2);
        assert_eq!(items[0].used_date, Some(today));
        assert_eq!(items[1].status, FoodStatus::Wasted);
    }

    #[test]
    fn retiring_twice_or_unknown_ids_fail() {
        let mut items = pantry();
        let today = date(2025, 5, 29);
        let milk = items[0].id;
        InventoryService::mark_used(&mut items, milk, today).unwrap();
        assert!(InventoryService::mark_wasted(&mut items, milk, today).is_err());
        let missing = InventoryService::mark_used(&mut items, Uuid::new_v4(), today);
        assert!(matches!(
            missing,
            Err(ServiceError::Food(FoodError::ItemNotFound(_)))
        ));
    }

    #[test]
    fn urgent_items_sorted_soonest_first() {
        let items = pantry();
        let today = date(2025, 5, 29);
        let urgent: Vec<&str> = InventoryService::urgent(&items, today)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(urgent, vec!["Spinach", "Chicken", "Milk"]);

        let fresh: Vec<&str> = InventoryService::fresh(&items, today)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(fresh, vec!["Bread"]);
        assert_eq!(InventoryService::home_listing(&items, today).len(), 4);
    }

    #[test]
    fn retired_items_leave_every_listing() {
        let mut items = pantry();
        let today = date(2025, 5, 29);
        let bread = items[3].id;
        InventoryService::mark_used(&mut items, bread, today).unwrap();
        assert!(InventoryService::fresh(&items, today).is_empty());
        assert_eq!(InventoryService::home_listing(&items, today).len(), 3);
    }
}
