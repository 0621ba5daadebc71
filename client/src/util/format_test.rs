use super::*;

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(1250.5, "EGP"), "1,250.50 EGP");
    assert_eq!(format_price(1_000_000.0, "EGP"), "1,000,000.00 EGP");
}

#[test]
fn format_price_small_and_negative_amounts() {
    assert_eq!(format_price(0.0, "EGP"), "0.00 EGP");
    assert_eq!(format_price(99.999, "USD"), "100.00 USD");
    assert_eq!(format_price(-1500.0, "EGP"), "-1,500.00 EGP");
}

#[test]
fn short_date_trims_time_component() {
    assert_eq!(short_date("2025-03-14T09:26:53.589Z"), "2025-03-14");
    assert_eq!(short_date("n/a"), "n/a");
}

#[test]
fn invoice_filename_uses_invoice_id() {
    assert_eq!(invoice_filename("IG-0007"), "invoice_IG-0007.pdf");
}
