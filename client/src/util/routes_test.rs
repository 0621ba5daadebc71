use super::*;

#[test]
fn public_pages_are_public() {
    for path in [HOME, ABOUT, CONTACT, PLANS, LOGIN, REGISTER, "/no-such-page"] {
        assert_eq!(access_for(path), Access::Public, "{path}");
    }
}

#[test]
fn customer_pages_require_authentication() {
    assert_eq!(access_for(DASHBOARD), Access::Authenticated);
    assert_eq!(access_for("/dashboard/"), Access::Authenticated);
    assert_eq!(access_for("/checkout/prod_1"), Access::Authenticated);
}

#[test]
fn admin_pages_and_unknown_subpaths_require_admin() {
    for path in [ADMIN, ADMIN_PRODUCTS, ADMIN_ORDERS, ADMIN_INVOICES, ADMIN_MESSAGES, "/admin/settings"] {
        assert_eq!(access_for(path), Access::Admin, "{path}");
    }
}

#[test]
fn prefix_lookalikes_are_not_protected() {
    assert_eq!(access_for("/administrator"), Access::Public);
    assert_eq!(access_for("/dashboards"), Access::Public);
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(access_for("/admin?tab=1"), Access::Admin);
    assert_eq!(access_for("/dashboard#session_id=abc"), Access::Authenticated);
}

#[test]
fn checkout_path_encodes_product_id() {
    assert_eq!(checkout_path("prod_1"), "/checkout/prod_1");
    assert_eq!(checkout_path("a b"), "/checkout/a%20b");
}

#[test]
fn mounted_routes_classify_as_guarded() {
    let mounted = [
        (HOME, Access::Public),
        (ABOUT, Access::Public),
        (CONTACT, Access::Public),
        (PLANS, Access::Public),
        (LOGIN, Access::Public),
        (REGISTER, Access::Public),
        ("/checkout/prod_1", Access::Authenticated),
        (DASHBOARD, Access::Authenticated),
        (ADMIN, Access::Admin),
        (ADMIN_PRODUCTS, Access::Admin),
        (ADMIN_ORDERS, Access::Admin),
        (ADMIN_INVOICES, Access::Admin),
        (ADMIN_MESSAGES, Access::Admin),
        ("/admin/anything", Access::Admin),
    ];
    for (path, access) in mounted {
        assert_eq!(access_for(path), access, "{path}");
    }
}
