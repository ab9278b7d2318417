//! Recognized raw table shapes and their fixed column sets.
//!
//! A raw export is a valid instance of a shape iff its column-name set
//! exactly equals the shape's defined set: order-independent, case-sensitive,
//! no extra or missing columns.

use std::fmt;

/// The two raw export shapes the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Master Air Waybill shipment-tracking export.
    Mawb,
    /// Shipper Site replenishment export.
    ShipperSite,
}

impl TableShape {
    pub fn description(&self) -> &'static str {
        match self {
            TableShape::Mawb => "MAWB",
            TableShape::ShipperSite => "Shipper Site",
        }
    }

    /// The full column set a raw export of this shape must carry.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableShape::Mawb => &MAWB_COLUMNS,
            TableShape::ShipperSite => &SHIPPER_SITE_COLUMNS,
        }
    }

    /// The (source, output) projection applied by this shape's normalizer.
    pub fn projection(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TableShape::Mawb => &MAWB_PROJECTION,
            TableShape::ShipperSite => &SHIPPER_SITE_PROJECTION,
        }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Columns present in every valid MAWB export.
pub const MAWB_COLUMNS: [&str; 34] = [
    "Create Date",
    "Create By",
    "Owner",
    "Load #",
    "Status",
    "Ref: MAWB",
    "Ref: Job Number",
    "Carrier Rate Carrier Name",
    "Ref: Flight Arrival",
    "Actual Ship Unit Quantity",
    "Actual Ship Unit Weight",
    "Ship Unit UOM (Actual Weight)",
    "Carrier Rate",
    "Target Ship (Early)",
    "Actual Ship Date",
    "Shipper Name",
    "Shipper Address",
    "Shipper City",
    "Shipper State",
    "Shipper Postal Code",
    "Shipper Country",
    "Target Delivery (Early)",
    "Actual Delivery Date",
    "Consignee Name",
    "Consignee Address",
    "Consignee City",
    "Consignee State",
    "Consignee Postal Code",
    "Consignee Country",
    "ActStat: Act Stat: Set Booking Status",
    "ActStat: Act Stat: Confirm PostFlight",
    "ActStat: Act Stat: Confirm Transfer 1",
    "ActStat: Act Stat: Confirm Transfer 2",
    "ActStat: Act Stat: Confirm Consignment Arr",
];

/// Columns present in every valid Shipper Site export.
pub const SHIPPER_SITE_COLUMNS: [&str; 30] = [
    "Create Date",
    "Create By",
    "Owner",
    "BillTo Code",
    "BillTo Name",
    "Load #",
    "Ref: House Waybill Number",
    "Ref: Temperature Range",
    "ActStat: Act Stat: RecoverTM",
    "ActPlan: Act Plan: Qualification Time",
    "Status",
    "Actual Ship Unit Quantity",
    "Actual Ship Unit Weight",
    "Ship Unit UOM (Actual Weight)",
    "Target Ship (Range)",
    "Actual Ship Date",
    "Ref: Shipper Site",
    "Shipper Name",
    "Shipper City",
    "Shipper State",
    "Shipper Country",
    "Target Delivery (Range)",
    "Actual Delivery Date",
    "ActPlan: Act Plan: Delivery Expiration",
    "Consignee Name",
    "Consignee City",
    "Consignee State",
    "Consignee Country",
    "ActStat: Act Stat: Gather Replenishment Details",
    "ActDate: Act Date: Gather Replenishment Details",
];

/// Source column -> output column projection for the MAWB normalizer.
/// Fixed 1:1 mapping; no two sources share a destination.
pub const MAWB_PROJECTION: [(&str, &str); 12] = [
    ("Ref: MAWB", "MAWB"),
    ("Ref: Job Number", "Job Number"),
    ("Carrier Rate Carrier Name", "Airline Name"),
    ("Ref: Flight Arrival", "Flight Arrival"),
    ("Shipper City", "Shipper Airport City"),
    ("Shipper State", "Shipper Airport State"),
    ("Shipper Postal Code", "Shipper Airport Postal Code"),
    ("Target Delivery (Early)", "Target Delivery Airport"),
    ("Consignee Name", "Consignee Airport Name"),
    ("Consignee City", "Consignee Airport City"),
    ("Consignee State", "Consignee Airport State"),
    ("Consignee Country", "Consignee Airport Country"),
];

/// Source column -> output column projection for the Shipper Site normalizer.
pub const SHIPPER_SITE_PROJECTION: [(&str, &str); 8] = [
    ("Load #", "Job Number"),
    ("Ref: House Waybill Number", "House Waybill Number"),
    ("Ref: Temperature Range", "Temperature Range"),
    ("ActPlan: Act Plan: Qualification Time", "Qualification Time"),
    ("Actual Ship Unit Quantity", "Ship Unit Quantity"),
    ("Actual Ship Unit Weight", "Ship Unit Weight"),
    ("Target Delivery (Range)", "Target Delivery Consignee"),
    ("Consignee City", "Consignee City"),
];

/// The key both normalized tables share and the joiner matches on.
pub const JOB_NUMBER: &str = "Job Number";

/// The MAWB shipment identifier column after renaming.
pub const MAWB_FIELD: &str = "MAWB";

/// The MAWB delivery date column in its raw (pre-projection) form.
pub const MAWB_TARGET_DELIVERY_SOURCE: &str = "Target Delivery (Early)";
