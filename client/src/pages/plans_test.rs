use super::*;

fn product(id: &str, category: ProductCategory, popular: bool) -> Product {
    Product {
        product_id: id.to_owned(),
        name_ar: String::new(),
        name_en: id.to_owned(),
        description_ar: String::new(),
        description_en: String::new(),
        category,
        price_monthly: 100.0,
        price_yearly: 960.0,
        features: Vec::new(),
        is_active: true,
        is_popular: popular,
    }
}

#[test]
fn products_in_category_filters_by_category() {
    let catalog = vec![
        product("basic", ProductCategory::Hosting, false),
        product("dot-com", ProductCategory::Domains, false),
        product("seo", ProductCategory::Marketing, false),
    ];
    let ids: Vec<String> = products_in_category(&catalog, ProductCategory::Domains)
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(ids, vec!["dot-com".to_owned()]);
}

#[test]
fn products_in_category_puts_popular_first_and_keeps_order() {
    let catalog = vec![
        product("basic", ProductCategory::Hosting, false),
        product("pro", ProductCategory::Hosting, true),
        product("business", ProductCategory::Hosting, false),
    ];
    let ids: Vec<String> = products_in_category(&catalog, ProductCategory::Hosting)
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(ids, vec!["pro".to_owned(), "basic".to_owned(), "business".to_owned()]);
}

#[test]
fn products_in_category_empty_catalog() {
    assert!(products_in_category(&[], ProductCategory::Marketing).is_empty());
}
