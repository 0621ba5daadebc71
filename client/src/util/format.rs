//! Display formatting for prices, dates and status labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{OrderStatus, PaymentStatus, PlanDuration};

/// `1250.5, "EGP"` -> `"1,250.50 EGP"`.
pub fn format_price(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents} {currency}")
}

/// Calendar date portion of an ISO-8601 timestamp.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

pub fn plan_label(duration: PlanDuration) -> &'static str {
    match duration {
        PlanDuration::Monthly => "Monthly",
        PlanDuration::Yearly => "Yearly",
    }
}

pub fn order_status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::Processing => "Processing",
        OrderStatus::Completed => "Completed",
        OrderStatus::Cancelled => "Cancelled",
    }
}

pub fn payment_status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "Awaiting payment",
        PaymentStatus::Paid => "Paid",
        PaymentStatus::Failed => "Failed",
        PaymentStatus::Refunded => "Refunded",
    }
}

pub fn invoice_filename(invoice_id: &str) -> String {
    format!("invoice_{invoice_id}.pdf")
}
