//! Ledger Model
//!
//! The editable ingredient price table. The ledger is the only source of
//! truth: prices and the total are derived on read, and the UI renders
//! [`Ledger::rows`] without ever parsing displayed text back.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{number_or, parse_typed_number};
use crate::wire::{ExtractionResponse, RawIngredient};

/// Lowest quantity the stepper buttons can reach
pub const MIN_QUANTITY: f64 = 0.1;
/// Amount one stepper click adds or removes
pub const STEP: f64 = 1.0;
/// Quantity used when the service sends none (or garbage)
pub const DEFAULT_QUANTITY: f64 = 1.0;
/// Unit price used when the service sends none (or garbage)
pub const DEFAULT_UNIT_PRICE: f64 = 0.0;

const UNNAMED_ITEM: &str = "Unnamed item";

/// Stable row identifier, assigned at load time.
///
/// Ids keep increasing across loads, so an id captured before a reload
/// never points at a row of the new table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u32);

impl ItemId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allergen column. The service sends either a flag or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allergen {
    Flag(bool),
    Label(String),
    Unknown,
}

impl Allergen {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(flag) => Allergen::Flag(*flag),
            Value::String(s) if !s.trim().is_empty() => Allergen::Label(s.trim().to_string()),
            Value::Number(n) => Allergen::Label(n.to_string()),
            _ => Allergen::Unknown,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Allergen::Flag(true) => "Yes",
            Allergen::Flag(false) => "No",
            Allergen::Label(text) => text,
            Allergen::Unknown => "Unknown",
        }
    }
}

/// One ingredient row.
///
/// Only `quantity` changes after creation; the unit price is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    id: ItemId,
    name: String,
    quantity: f64,
    unit: String,
    unit_price: f64,
    allergen: Allergen,
}

impl LineItem {
    fn from_raw(id: ItemId, raw: &RawIngredient) -> Self {
        let name = raw.item_name.trim();
        Self {
            id,
            name: if name.is_empty() { UNNAMED_ITEM.to_string() } else { name.to_string() },
            quantity: number_or(&raw.qty, DEFAULT_QUANTITY),
            unit: raw.unit.trim().to_string(),
            unit_price: number_or(&raw.unit_price, DEFAULT_UNIT_PRICE),
            allergen: Allergen::from_value(&raw.allergen),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn allergen(&self) -> &Allergen {
        &self.allergen
    }

    /// `quantity * unit_price`, computed on every call
    pub fn price(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Table header: which dish, for how many people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishSummary {
    pub food_name: String,
    pub persons: Option<f64>,
}

impl DishSummary {
    pub fn headline(&self) -> String {
        match self.persons {
            Some(persons) => format!("{} for {} people", self.food_name, persons),
            None => self.food_name.clone(),
        }
    }
}

/// Stepper direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Increment,
    Decrement,
}

impl Step {
    pub fn delta(self) -> f64 {
        match self {
            Step::Increment => 1.0,
            Step::Decrement => -1.0,
        }
    }
}

/// Everything the table lets a user do to a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerAction {
    Remove(ItemId),
    /// Raw text typed into the quantity field
    SetQuantity(ItemId, String),
    Adjust(ItemId, Step),
}

/// Display projection of one row, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub allergen: String,
    pub price: String,
}

/// `$` + two decimals. Negative zero renders as `$0.00`.
///
/// Exact half-cent ties round away from zero (`0.625` is `$0.63`), the way
/// a browser's `toFixed(2)` shows them.
pub fn format_price(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("${:.2}", round_ties_away(amount))
}

/// `{:.2}` rounds exact ties to even. The only doubles sitting exactly on a
/// half cent are odd multiples of 1/8, and scaling by 8 is exact.
fn round_ties_away(amount: f64) -> f64 {
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (amount * 100.0).round() / 100.0
    } else {
        amount
    }
}

fn project(item: &LineItem) -> LedgerRow {
    LedgerRow {
        id: item.id,
        name: item.name.clone(),
        quantity: item.quantity.to_string(),
        unit: item.unit.clone(),
        allergen: item.allergen.label().to_string(),
        price: format_price(item.price()),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ingredient rows for the dish currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    dish: Option<DishSummary>,
    items: Vec<LineItem>,
    next_id: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table with an extraction response, header included.
    pub fn load(&mut self, response: &ExtractionResponse) {
        self.dish = Some(DishSummary {
            food_name: response.food_name.clone(),
            persons: response.persons(),
        });
        self.load_items(&response.ingredients);
    }

    /// Replace all rows, one per raw ingredient, in input order.
    ///
    /// Missing or non-numeric `qty` becomes 1 and `unitPrice` becomes 0.
    pub fn load_items(&mut self, raw_items: &[RawIngredient]) {
        let mut items = Vec::with_capacity(raw_items.len());
        for raw in raw_items {
            let id = self.allocate_id();
            items.push(LineItem::from_raw(id, raw));
        }
        self.items = items;
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Drop a row for good. Unknown or already removed ids are ignored.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Quantity typed into the field. Unparseable text counts as 0.
    ///
    /// Typed values are taken as-is and may sit below [`MIN_QUANTITY`];
    /// only the stepper clamps.
    pub fn set_quantity(&mut self, id: ItemId, input: &str) -> bool {
        let quantity = parse_typed_number(input);
        match self.item_mut(id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Stepper click: `delta * STEP`, clamped to [`MIN_QUANTITY`], kept to two decimals.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: f64) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                let next = (item.quantity + delta * STEP).max(MIN_QUANTITY);
                item.quantity = round_cents(next);
                true
            }
            None => false,
        }
    }

    /// Apply a UI action. Returns whether any row changed.
    pub fn dispatch(&mut self, action: LedgerAction) -> bool {
        match action {
            LedgerAction::Remove(id) => self.remove_item(id),
            LedgerAction::SetQuantity(id, input) => self.set_quantity(id, &input),
            LedgerAction::Adjust(id, step) => self.adjust_quantity(id, step.delta()),
        }
    }

    /// Sum of every current row's price, re-added from scratch each call.
    pub fn total(&self) -> f64 {
        self.items.iter().fold(0.0, |sum, item| sum + item.price())
    }

    pub fn formatted_total(&self) -> String {
        format_price(self.total())
    }

    pub fn rows(&self) -> Vec<LedgerRow> {
        self.items.iter().map(project).collect()
    }

    /// Projection of a single row, if it is still present
    pub fn row(&self, id: ItemId) -> Option<LedgerRow> {
        self.get(id).map(project)
    }

    pub fn dish(&self) -> Option<&DishSummary> {
        self.dish.as_ref()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn raw(name: &str, qty: Value, unit_price: Value) -> RawIngredient {
        RawIngredient {
            item_name: name.to_string(),
            qty,
            unit_price,
            unit: "kg".to_string(),
            allergen: json!("No"),
        }
    }

    fn flour_ledger() -> (Ledger, ItemId) {
        let mut ledger = Ledger::new();
        ledger.load_items(&[raw("Flour", json!(2), json!(1.5))]);
        let id = ledger.items()[0].id();
        (ledger, id)
    }

    #[test]
    fn test_load_single_row() {
        let (ledger, id) = flour_ledger();
        let rows = ledger.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].name, "Flour");
        assert_eq!(rows[0].quantity, "2");
        assert_eq!(rows[0].unit, "kg");
        assert_eq!(rows[0].allergen, "No");
        assert_eq!(rows[0].price, "$3.00");
        assert_eq!(ledger.formatted_total(), "$3.00");
    }

    #[test]
    fn test_set_quantity_updates_price_and_total() {
        let (mut ledger, id) = flour_ledger();
        assert!(ledger.set_quantity(id, "4"));
        assert_eq!(ledger.row(id).unwrap().price, "$6.00");
        assert_eq!(ledger.formatted_total(), "$6.00");
    }

    #[test]
    fn test_remove_last_row_zeroes_total() {
        let (mut ledger, id) = flour_ledger();
        ledger.set_quantity(id, "4");
        assert!(ledger.remove_item(id));
        assert!(ledger.rows().is_empty());
        assert!(ledger.row(id).is_none());
        assert_eq!(ledger.total(), 0.0);
        assert_eq!(ledger.formatted_total(), "$0.00");
    }

    #[test]
    fn test_decrement_at_minimum_stays_clamped() {
        let mut ledger = Ledger::new();
        ledger.load_items(&[raw("Salt", json!(0.1), json!(2))]);
        let id = ledger.items()[0].id();
        let before = ledger.rows()[0].price.clone();

        assert!(ledger.adjust_quantity(id, Step::Decrement.delta()));
        assert_eq!(ledger.get(id).unwrap().quantity(), MIN_QUANTITY);
        assert_eq!(ledger.rows()[0].price, before);
    }

    #[test]
    fn test_repeated_decrement_never_below_minimum() {
        let (mut ledger, id) = flour_ledger();
        ledger.set_quantity(id, "7.35");
        for _ in 0..25 {
            ledger.dispatch(LedgerAction::Adjust(id, Step::Decrement));
            assert!(ledger.get(id).unwrap().quantity() >= MIN_QUANTITY);
        }
        assert_eq!(ledger.get(id).unwrap().quantity(), MIN_QUANTITY);
    }

    #[test]
    fn test_increment_rounds_to_cents() {
        let (mut ledger, id) = flour_ledger();
        ledger.set_quantity(id, "0.333");
        ledger.dispatch(LedgerAction::Adjust(id, Step::Increment));
        assert_eq!(ledger.get(id).unwrap().quantity(), 1.33);
    }

    #[test]
    fn test_typed_quantity_is_not_clamped() {
        let (mut ledger, id) = flour_ledger();
        ledger.set_quantity(id, "0.05");
        assert_eq!(ledger.get(id).unwrap().quantity(), 0.05);

        ledger.set_quantity(id, "abc");
        assert_eq!(ledger.get(id).unwrap().quantity(), 0.0);
        assert_eq!(ledger.formatted_total(), "$0.00");
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut ledger = Ledger::new();
        ledger.load_items(&[
            raw("Flour", json!(2), json!(1.5)),
            raw("Sugar", json!(1), json!(2.25)),
        ]);
        let flour = ledger.items()[0].id();

        assert!(ledger.remove_item(flour));
        let after_first = ledger.clone();
        assert!(!ledger.remove_item(flour));
        assert_eq!(ledger, after_first);
        assert_eq!(ledger.formatted_total(), "$2.25");
    }

    #[test]
    fn test_malformed_fields_default() {
        let mut ledger = Ledger::new();
        ledger.load_items(&[
            raw("Eggs", json!("abc"), json!(0.5)),
            raw("Water", json!(3), Value::Null),
        ]);
        let rows = ledger.rows();
        assert_eq!(rows[0].quantity, "1");
        assert_eq!(rows[1].price, "$0.00");
    }

    #[test]
    fn test_empty_name_gets_placeholder() {
        let mut ledger = Ledger::new();
        ledger.load_items(&[raw("  ", json!(1), json!(1))]);
        assert_eq!(ledger.items()[0].name(), UNNAMED_ITEM);
    }

    #[test]
    fn test_reload_replaces_rows_and_invalidates_old_ids() {
        let (mut ledger, old_id) = flour_ledger();
        ledger.load_items(&[raw("Rice", json!(1), json!(4))]);

        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(old_id).is_none());
        assert!(!ledger.set_quantity(old_id, "9"));
        assert!(!ledger.remove_item(old_id));
        assert_eq!(ledger.formatted_total(), "$4.00");
    }

    #[test]
    fn test_load_sets_dish_headline() {
        let response: ExtractionResponse = serde_json::from_value(json!({
            "foodName": "Pancakes",
            "noOfPersons": 4,
            "ingredients": [{"itemName": "Flour", "qty": 2, "unitPrice": 1.5, "unit": "kg", "allergen": true}]
        }))
        .unwrap();

        let mut ledger = Ledger::new();
        ledger.load(&response);
        assert_eq!(ledger.dish().unwrap().headline(), "Pancakes for 4 people");
        assert_eq!(ledger.rows()[0].allergen, "Yes");
    }

    #[test]
    fn test_allergen_labels() {
        assert_eq!(Allergen::from_value(&json!(false)).label(), "No");
        assert_eq!(Allergen::from_value(&json!("Contains gluten")).label(), "Contains gluten");
        assert_eq!(Allergen::from_value(&Value::Null).label(), "Unknown");
    }

    #[test]
    fn test_format_price_negative_zero() {
        assert_eq!(format_price(-0.0), "$0.00");
        assert_eq!(format_price(1.005 * 2.0), "$2.01");
    }

    #[test]
    fn test_format_price_half_cent_ties_round_up() {
        assert_eq!(format_price(0.625), "$0.63");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(0.375), "$0.38");
        assert_eq!(format_price(2.0), "$2.00");
        // 1.005 is stored just below the tie
        assert_eq!(format_price(1.005), "$1.00");
    }

    #[test]
    fn test_half_cent_row_and_total() {
        let mut ledger = Ledger::new();
        ledger.load_items(&[raw("Butter", json!(0.5), json!(1.25))]);
        assert_eq!(ledger.rows()[0].price, "$0.63");
        assert_eq!(ledger.formatted_total(), "$0.63");
    }

    #[derive(Debug, Clone)]
    enum Mutation {
        Remove(usize),
        Type(usize, f64),
        Stepper(usize, bool),
        Reload(Vec<(f64, f64)>),
    }

    fn mutation() -> impl Strategy<Value = Mutation> {
        prop_oneof![
            (0usize..12).prop_map(Mutation::Remove),
            (0usize..12, 0.0f64..50.0).prop_map(|(i, q)| Mutation::Type(i, q)),
            (0usize..12, any::<bool>()).prop_map(|(i, up)| Mutation::Stepper(i, up)),
            prop::collection::vec((0.0f64..10.0, 0.0f64..20.0), 0..8).prop_map(Mutation::Reload),
        ]
    }

    fn raw_rows(rows: &[(f64, f64)]) -> Vec<RawIngredient> {
        rows.iter()
            .enumerate()
            .map(|(i, (qty, price))| raw(&format!("item {}", i), json!(qty), json!(price)))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_total_matches_independent_sum(
            initial in prop::collection::vec((0.0f64..10.0, 0.0f64..20.0), 1..10),
            mutations in prop::collection::vec(mutation(), 20..60),
        ) {
            let mut ledger = Ledger::new();
            ledger.load_items(&raw_rows(&initial));

            for m in mutations {
                let ids: Vec<ItemId> = ledger.items().iter().map(|item| item.id()).collect();
                // Indexes past the end hit an id that no longer exists.
                let pick = |i: usize| ids.get(i).copied().unwrap_or(ItemId(u32::MAX));
                match m {
                    Mutation::Remove(i) => { ledger.dispatch(LedgerAction::Remove(pick(i))); }
                    Mutation::Type(i, q) => {
                        ledger.dispatch(LedgerAction::SetQuantity(pick(i), q.to_string()));
                    }
                    Mutation::Stepper(i, up) => {
                        let step = if up { Step::Increment } else { Step::Decrement };
                        ledger.dispatch(LedgerAction::Adjust(pick(i), step));
                    }
                    Mutation::Reload(rows) => ledger.load_items(&raw_rows(&rows)),
                }

                let expected: f64 = ledger
                    .items()
                    .iter()
                    .map(|item| item.quantity() * item.unit_price())
                    .fold(0.0, |a, b| a + b);
                prop_assert_eq!(ledger.total(), expected);
                prop_assert_eq!(ledger.formatted_total(), format_price(expected));
            }
        }
    }
}
