use super::*;

#[derive(Debug, PartialEq)]
struct Stamped {
    id: u32,
    created_at: String,
}

fn stamped(id: u32, created_at: &str) -> Stamped {
    Stamped { id, created_at: created_at.to_owned() }
}

#[test]
fn newest_first_orders_by_timestamp_descending() {
    let items = vec![
        stamped(1, "2025-01-05T10:00:00Z"),
        stamped(2, "2025-03-01T08:30:00Z"),
        stamped(3, "2025-02-11T23:59:59Z"),
    ];
    let ids: Vec<u32> = newest_first(items, |s| s.created_at.as_str()).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn status_classes_distinguish_outcomes() {
    assert_eq!(payment_status_class(PaymentStatus::Paid), "badge badge--success");
    assert_eq!(payment_status_class(PaymentStatus::Failed), "badge badge--danger");
    assert_eq!(order_status_class(OrderStatus::Pending), "badge badge--pending");
    assert_eq!(order_status_class(OrderStatus::Cancelled), "badge badge--muted");
}
