//! Report builders.
//!
//! Each builder mirrors one of the dashboard's download actions: the
//! single-property detail sheet, and the per-cell / per-village /
//! per-sector collection summaries.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use paypack_core::PropertyId;
use paypack_properties::Property;
use paypack_transactions::Transaction;

use crate::format;
use crate::table::{Table, TableReport};

/// Collection totals for a set of properties: how many houses have settled
/// their dues, and how much money that represents either way.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollectionSummary {
    pub houses: u64,
    pub payed: u64,
    pub payed_amount: f64,
    pub pending: u64,
    pub unpayed_amount: f64,
}

impl CollectionSummary {
    /// Tally a set of properties against the ids that have paid.
    pub fn tally(properties: &[Property], paid: &HashSet<PropertyId>) -> Self {
        let mut summary = Self {
            houses: properties.len() as u64,
            ..Self::default()
        };
        for property in properties {
            if paid.contains(&property.id) {
                summary.payed += 1;
                summary.payed_amount += property.due;
            } else {
                summary.pending += 1;
                summary.unpayed_amount += property.due;
            }
        }
        summary
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.houses.to_string(),
            self.payed.to_string(),
            format::amount(self.payed_amount),
            self.pending.to_string(),
            format::amount(self.unpayed_amount),
        ]
    }

    fn headers() -> Vec<String> {
        ["No of Houses", "Payed Houses", "Payed Amount", "Unpayed Houses", "Unpayed Amount"]
            .map(String::from)
            .to_vec()
    }
}

/// Detail sheet for one property: its registration record plus payment
/// history.
pub fn property_details(property: &Property, payments: &[Transaction]) -> TableReport {
    let name = property.owner.full_name();

    let mut details = Table::new(
        format!("Details of {name}:"),
        ["", ""].map(String::from).to_vec(),
    );
    let mut field = |key: &str, value: String| details.push_row(vec![key.to_string(), value]);
    field("Names", name.clone());
    field("Phone Number", property.owner.phone.clone());
    field("House ID", property.id.to_string());
    field("Location", property.address.to_string());
    field("Amount", format::amount(property.due));
    field("For Rent", format::yes_no(property.occupied).to_string());
    field("Registered by", property.recorded_by.clone());
    field("Registered on", format::date(property.created_at));

    let mut history = Table::new(
        format!("Payment History of {name}:"),
        ["Date", "Amount"].map(String::from).to_vec(),
    );
    for payment in payments {
        history.push_row(vec![
            format::date(payment.date_recorded),
            format::amount(payment.amount),
        ]);
    }

    TableReport::new(
        format!("{}-details.pdf", property.id),
        vec![details, history],
    )
}

/// Listing of every property in a location, one row per house. `as_of` is
/// the download date stamped into the filename.
pub fn property_listing(name: &str, properties: &[Property], as_of: DateTime<Utc>) -> TableReport {
    let mut listing = Table::new(
        format!("List of Properties in {name}"),
        [
            "Full Name",
            "House Code",
            "Phone Number",
            "Sector",
            "Cell",
            "Village",
            "Rented",
            "Amount",
        ]
        .map(String::from)
        .to_vec(),
    );
    for property in properties {
        listing.push_row(vec![
            property.owner.full_name(),
            property.id.to_string(),
            property.owner.phone.clone(),
            property.address.sector.clone(),
            property.address.cell.clone(),
            property.address.village.clone(),
            format::yes_no(property.occupied).to_string(),
            format::amount(property.due),
        ]);
    }

    TableReport::new(
        format!("List of Properties in {name} on {}.pdf", format::date(as_of)),
        vec![listing],
    )
}

/// Summary report for one cell: cell totals plus a per-village breakdown.
pub fn cell_report(
    cell_name: &str,
    cell: CollectionSummary,
    villages: &[(String, CollectionSummary)],
) -> TableReport {
    let mut report = summary_report(cell_name, cell);

    let mut breakdown = Table::new(
        format!("{cell_name} villages:"),
        std::iter::once("Village".to_string())
            .chain(CollectionSummary::headers())
            .collect(),
    );
    for (village, summary) in villages {
        let mut row = vec![village.clone()];
        row.extend(summary.row());
        breakdown.push_row(row);
    }
    report.tables.push(breakdown);
    report
}

/// Summary report for one village.
pub fn village_report(village_name: &str, village: CollectionSummary) -> TableReport {
    summary_report(village_name, village)
}

/// Summary report for a whole sector: sector totals plus per-cell breakdown.
pub fn sector_report(
    sector_name: &str,
    sector: CollectionSummary,
    cells: &[(String, CollectionSummary)],
) -> TableReport {
    let mut report = summary_report(sector_name, sector);

    let mut breakdown = Table::new(
        format!("{sector_name} cells:"),
        std::iter::once("Cell".to_string())
            .chain(CollectionSummary::headers())
            .collect(),
    );
    for (cell, summary) in cells {
        let mut row = vec![cell.clone()];
        row.extend(summary.row());
        breakdown.push_row(row);
    }
    report.tables.push(breakdown);
    report
}

fn summary_report(name: &str, summary: CollectionSummary) -> TableReport {
    let mut totals = Table::new(format!("Report of {name}:"), CollectionSummary::headers());
    totals.push_row(summary.row());

    TableReport::new(
        format!("{}-report.pdf", name.to_lowercase().replace(' ', "-")),
        vec![totals],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use paypack_core::{Address, OwnerId, TransactionId};
    use paypack_properties::Owner;

    fn property(due: f64) -> Property {
        Property {
            id: PropertyId::new(),
            due,
            owner: Owner {
                id: OwnerId::new(),
                fname: "Claudine".to_string(),
                lname: "Uwera".to_string(),
                phone: "0788000001".to_string(),
            },
            address: Address::new("remera", "rukiri I", "amajyambere"),
            occupied: true,
            recorded_by: "agent.habimana".to_string(),
            created_at: Utc.with_ymd_and_hms(2020, 1, 3, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn detail_sheet_lists_the_registration_record() {
        let p = property(12_000.0);
        let payment = Transaction {
            id: TransactionId::new(),
            made_for: p.id,
            made_by: p.owner.id,
            address: p.address.clone(),
            amount: 12_000.0,
            method: "cash".to_string(),
            invoice: 1,
            date_recorded: Utc.with_ymd_and_hms(2020, 2, 1, 8, 0, 0).unwrap(),
        };

        let report = property_details(&p, &[payment]);
        assert_eq!(report.filename, format!("{}-details.pdf", p.id));
        assert_eq!(report.tables.len(), 2);

        let details = &report.tables[0];
        assert_eq!(details.title, "Details of Claudine Uwera:");
        let row = |key: &str| {
            details
                .rows
                .iter()
                .find(|r| r[0] == key)
                .unwrap_or_else(|| panic!("missing row {key}"))[1]
                .clone()
        };
        assert_eq!(row("Amount"), "12,000 Rwf");
        assert_eq!(row("Location"), "remera, rukiri I, amajyambere");
        assert_eq!(row("For Rent"), "Yes");
        assert_eq!(row("Registered on"), "January 3, 2020");

        let history = &report.tables[1];
        assert_eq!(history.rows, vec![vec![
            "February 1, 2020".to_string(),
            "12,000 Rwf".to_string(),
        ]]);
    }

    #[test]
    fn listing_has_one_row_per_property() {
        let a = property(5_000.0);
        let b = property(12_500.0);
        let as_of = Utc.with_ymd_and_hms(2020, 3, 14, 10, 0, 0).unwrap();

        let report = property_listing("Rukiri I", &[a.clone(), b], as_of);
        assert_eq!(
            report.filename,
            "List of Properties in Rukiri I on March 14, 2020.pdf"
        );

        let listing = &report.tables[0];
        assert_eq!(listing.title, "List of Properties in Rukiri I");
        assert_eq!(listing.headers[1], "House Code");
        assert_eq!(listing.rows.len(), 2);
        assert_eq!(listing.rows[0], vec![
            "Claudine Uwera".to_string(),
            a.id.to_string(),
            "0788000001".to_string(),
            "remera".to_string(),
            "rukiri I".to_string(),
            "amajyambere".to_string(),
            "Yes".to_string(),
            "5,000 Rwf".to_string(),
        ]);
        assert_eq!(listing.rows[1][7], "12,500 Rwf");
    }

    #[test]
    fn listing_of_no_properties_is_just_the_header() {
        let as_of = Utc.with_ymd_and_hms(2020, 3, 14, 10, 0, 0).unwrap();
        let report = property_listing("Kamahwa", &[], as_of);
        assert!(report.tables[0].rows.is_empty());
    }

    #[test]
    fn tally_splits_paid_and_pending() {
        let paid_house = property(5_000.0);
        let pending_a = property(3_000.0);
        let pending_b = property(2_500.0);
        let paid: HashSet<PropertyId> = [paid_house.id].into_iter().collect();

        let summary = CollectionSummary::tally(
            &[paid_house, pending_a, pending_b],
            &paid,
        );
        assert_eq!(summary.houses, 3);
        assert_eq!(summary.payed, 1);
        assert_eq!(summary.payed_amount, 5_000.0);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.unpayed_amount, 5_500.0);
    }

    #[test]
    fn cell_report_carries_totals_and_village_breakdown() {
        let summary = CollectionSummary {
            houses: 10,
            payed: 6,
            payed_amount: 60_000.0,
            pending: 4,
            unpayed_amount: 40_000.0,
        };
        let villages = vec![
            ("amajyambere".to_string(), summary),
            ("ubumwe".to_string(), CollectionSummary::default()),
        ];

        let report = cell_report("Rukiri I", summary, &villages);
        assert_eq!(report.filename, "rukiri-i-report.pdf");
        assert_eq!(report.tables[0].rows[0][2], "60,000 Rwf");
        assert_eq!(report.tables[1].rows.len(), 2);
        assert_eq!(report.tables[1].rows[0][0], "amajyambere");
    }

    #[test]
    fn village_report_is_a_single_summary_table() {
        let report = village_report("Kamahwa", CollectionSummary::default());
        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].rows[0][0], "0");
    }

    #[test]
    fn sector_report_breaks_down_by_cell() {
        let report = sector_report(
            "Remera",
            CollectionSummary::default(),
            &[("rukiri I".to_string(), CollectionSummary::default())],
        );
        assert_eq!(report.tables.len(), 2);
        assert_eq!(report.tables[1].headers[0], "Cell");
    }
}
