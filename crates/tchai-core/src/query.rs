//! Ordering, filtering and balance aggregation over transactions

use crate::error::CoreResult;
use crate::models::Transaction;

/// Sort ascending by timestamp; equal timestamps keep their input order
pub fn sort_transactions(transactions: Vec<Transaction>) -> CoreResult<Vec<Transaction>> {
    let mut keyed = transactions
        .into_iter()
        .map(|tx| tx.timestamp().map(|ts| (ts, tx)))
        .collect::<CoreResult<Vec<_>>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, tx)| tx).collect())
}

/// Transactions sent or received by `person`, in input order
pub fn filter_by_person(transactions: &[Transaction], person: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.involves(person))
        .cloned()
        .collect()
}

/// Amount received by `person` minus amount sent
pub fn balance(transactions: &[Transaction], person: &str) -> f64 {
    let received: f64 = transactions.iter().filter(|tx| tx.p2 == person).map(|tx| tx.a).sum();
    let sent: f64 = transactions.iter().filter(|tx| tx.p1 == person).map(|tx| tx.a).sum();
    received - sent
}
