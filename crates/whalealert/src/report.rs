//! Plain-text reports printed by each subcommand.

use std::fmt::Write;

use whalealert_core::{StatusResponse, Transaction, TransactionResponse, TransactionsResponse};

pub fn status(status: &StatusResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Request result: {}", status.result);
    let _ = writeln!(out, "Blockchain count: {}", status.blockchain_count);
    let _ = writeln!(out, "Blockchain data:");
    for blockchain in &status.blockchains {
        let _ = writeln!(
            out,
            "Blockchain: {}, status: {}, symbols: {}",
            blockchain.name,
            blockchain.status,
            blockchain.symbols.join(",")
        );
    }
    out
}

pub fn lookup(res: &TransactionResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Result: {}", res.result);
    let _ = writeln!(out, "Count of transactions: {}", res.count);
    write_transactions(&mut out, &res.transactions);
    out
}

pub fn listing(res: &TransactionsResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Result: {}", res.result);
    let _ = writeln!(
        out,
        "Count of transactions: {} and api cursor: {}",
        res.count, res.cursor
    );
    write_transactions(&mut out, &res.transactions);
    out
}

fn write_transactions(out: &mut String, transactions: &[Transaction]) {
    for (i, tx) in transactions.iter().enumerate() {
        let _ = writeln!(out, "Transaction number: {}", i + 1);
        let _ = writeln!(out, "  hash: {}", tx.hash);
        let _ = writeln!(out, "  blockchain: {}, symbol: {}", tx.blockchain, tx.symbol);
        let _ = writeln!(out, "  amount: {} (USD {})", tx.amount, tx.amount_usd);
        let _ = writeln!(out, "  timestamp: {}", tx.timestamp);
        let _ = writeln!(out, "  from: {} ({})", tx.from.address, tx.from.owner);
        let _ = writeln!(out, "  to: {} ({})", tx.to.address, tx.to.owner);
    }
}

#[cfg(test)]
mod tests {
    use whalealert_core::{Blockchain, Owner};

    use super::*;

    #[test]
    fn status_report_joins_symbols() {
        let report = status(&StatusResponse {
            result: "success".into(),
            blockchain_count: 1,
            blockchains: vec![Blockchain {
                name: "stellar".into(),
                symbols: vec!["mobi".into(), String::new(), "xlm".into()],
                status: "connected".into(),
            }],
        });

        assert!(report.contains("Blockchain count: 1"));
        assert!(report.contains("Blockchain: stellar, status: connected, symbols: mobi,,xlm"));
    }

    #[test]
    fn listing_report_numbers_transactions() {
        let tx = Transaction {
            blockchain: "ethereum".into(),
            symbol: "usdc".into(),
            hash: "7fc6".into(),
            from: Owner {
                address: "6224".into(),
                owner: "Kraken".into(),
                owner_type: "exchange".into(),
            },
            amount: 5000000.0,
            ..Default::default()
        };
        let report = listing(&TransactionsResponse {
            result: "success".into(),
            cursor: "76a63333-76a63333-641f534f".into(),
            count: 2,
            transactions: vec![tx.clone(), tx],
        });

        assert!(report.contains("api cursor: 76a63333-76a63333-641f534f"));
        assert!(report.contains("Transaction number: 2"));
        assert!(report.contains("from: 6224 (Kraken)"));
    }

    #[test]
    fn empty_lookup_report_has_no_transactions() {
        let report = lookup(&TransactionResponse {
            result: "success".into(),
            count: 0,
            transactions: Vec::new(),
        });
        assert_eq!(report, "Result: success\nCount of transactions: 0\n");
    }
}
