use super::*;

#[test]
fn overview_entry_matches_exactly() {
    assert!(is_nav_active("/admin", ADMIN, true));
    assert!(is_nav_active("/admin/", ADMIN, true));
    assert!(!is_nav_active("/admin/orders", ADMIN, true));
}

#[test]
fn section_entries_match_their_subtree() {
    assert!(is_nav_active("/admin/orders", ADMIN_ORDERS, false));
    assert!(is_nav_active("/admin/orders/ord_1", ADMIN_ORDERS, false));
    assert!(!is_nav_active("/admin/ordersx", ADMIN_ORDERS, false));
    assert!(!is_nav_active("/admin/products", ADMIN_ORDERS, false));
}

#[test]
fn toggle_update_inverts_only_the_requested_flag() {
    use crate::net::types::{Product, ProductCategory};
    use super::products::{ProductFlag, toggle_update};

    let product = Product {
        product_id: "p1".to_owned(),
        name_ar: String::new(),
        name_en: "Starter".to_owned(),
        description_ar: String::new(),
        description_en: String::new(),
        category: ProductCategory::Hosting,
        price_monthly: 99.0,
        price_yearly: 950.0,
        features: Vec::new(),
        is_active: true,
        is_popular: false,
    };
    let active = toggle_update(&product, ProductFlag::Active);
    assert_eq!(active.is_active, Some(false));
    assert_eq!(active.is_popular, None);

    let popular = toggle_update(&product, ProductFlag::Popular);
    assert_eq!(popular.is_active, None);
    assert_eq!(popular.is_popular, Some(true));
}

#[test]
fn unread_count_ignores_read_messages() {
    use crate::net::types::ContactMessage;

    let message = |id: &str, is_read: bool| ContactMessage {
        message_id: id.to_owned(),
        name: "Ali".to_owned(),
        email: "ali@example.com".to_owned(),
        phone: None,
        message: "Hello".to_owned(),
        is_read,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    };
    let inbox = vec![message("m1", false), message("m2", true), message("m3", false)];
    assert_eq!(super::messages::unread_count(&inbox), 2);
    assert_eq!(super::messages::unread_count(&[]), 0);
}

#[test]
fn stat_tiles_lead_with_formatted_revenue() {
    use crate::net::types::AdminStats;

    let stats = AdminStats { total_revenue: 12_500.0, unread_messages: 3, ..AdminStats::default() };
    let tiles = super::overview::stat_tiles(&stats);
    assert_eq!(tiles[0], ("Total revenue", "12,500.00 EGP".to_owned()));
    assert_eq!(tiles.last(), Some(&("Unread messages", "3".to_owned())));
    assert_eq!(tiles.len(), 7);
}
