#[cfg(test)]
mod tests {
    use crate::{
        config::endpoint_host,
        display::{format::format_timestamp, truncate_signature, Presenter},
        models::TransactionRecord,
        tests::fixtures::{self, BrokenPipe},
    };

    fn render(record: &TransactionRecord) -> String {
        let mut presenter = fixtures::capture();
        presenter.transaction(record);
        fixtures::output(presenter)
    }

    #[test]
    fn successful_transaction_panel() {
        let sig = fixtures::signature(42);
        let out = render(&fixtures::record(&sig));

        assert!(out.contains(&format!("Transaction: {}...", truncate_signature(&sig))));
        assert!(out.contains(&format_timestamp(1_700_000_000).unwrap()));
        assert!(out.contains("250000000"));
        assert!(out.contains("Success"));
        assert!(out.contains("Fee (SOL)"));
        assert!(out.contains("0.000005000"));
        assert!(out.contains("Balance Change (SOL)"));
        assert!(out.contains("-0.000005000"));
        assert!(!out.contains(&sig));
    }

    #[test]
    fn panel_rows_are_aligned() {
        let out = render(&fixtures::record(&fixtures::signature(1)));
        let widths: Vec<usize> = out
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().count())
            .collect();

        assert_eq!(widths.len(), 9);
        assert!(widths.iter().all(|w| *w == widths[0]), "{out}");
    }

    #[test]
    fn failed_transaction_is_labelled() {
        let mut record = fixtures::record(&fixtures::signature(2));
        record.error = Some("insufficient funds for fee".to_string());

        let out = render(&record);

        assert!(out.contains("Failed (insufficient funds for fee)"));
        assert!(!out.contains("Success"));
    }

    #[test]
    fn balance_row_needs_both_balance_lists() {
        let mut record = fixtures::record(&fixtures::signature(3));
        record.post_balances.clear();

        let out = render(&record);

        assert!(out.contains("Fee (SOL)"));
        assert!(!out.contains("Balance Change"));
    }

    #[test]
    fn positive_balance_change_has_plus_sign() {
        let mut record = fixtures::record(&fixtures::signature(4));
        record.pre_balances = vec![1_000_000_000];
        record.post_balances = vec![3_500_000_000];

        assert!(render(&record).contains("+2.500000000"));
    }

    #[test]
    fn missing_block_time_skips_the_record() {
        let sig = fixtures::signature(5);
        let mut record = fixtures::record(&sig);
        record.block_time = None;

        let out = render(&record);

        assert!(out.contains(&format!(
            "Skipping transaction {}...: missing field `blockTime`",
            truncate_signature(&sig)
        )));
        assert!(!out.contains("Fee (SOL)"));
    }

    #[test]
    fn out_of_range_block_time_skips_the_record() {
        let mut record = fixtures::record(&fixtures::signature(6));
        record.block_time = Some(i64::MAX);

        let out = render(&record);

        assert!(out.contains("out of range"));
        assert!(!out.contains("Fee (SOL)"));
    }

    #[test]
    fn status_messages() {
        let mut presenter = fixtures::capture();
        let address = fixtures::address();

        presenter.banner(&address, "localhost:8899");
        presenter.updating();
        presenter.no_transactions(&address);
        presenter.stopped();

        let out = fixtures::output(presenter);
        let lines: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
        assert!(lines[0].contains("Monitoring Solana transactions..."));
        assert!(lines[1].contains(fixtures::ADDRESS));
        assert!(lines[1].contains("via localhost:8899"));
        assert!(lines[2].contains("Updating..."));
        assert!(lines[3].contains(&format!("No recent transactions for {}", fixtures::ADDRESS)));
        assert!(lines[4].contains("Monitoring stopped."));
    }

    #[test]
    fn banner_shows_endpoint_host_only() {
        let mut presenter = fixtures::capture();
        let rpc_url = "https://mainnet.helius-rpc.com/?api-key=secret123";

        presenter.banner(&fixtures::address(), &endpoint_host(rpc_url));

        let out = fixtures::output(presenter);
        assert!(out.contains("via mainnet.helius-rpc.com"));
        assert!(!out.contains("secret123"));
    }

    #[test]
    fn unreadable_listing_is_reported_as_provider_unavailable() {
        let mut presenter = fixtures::capture();
        let err = crate::MonitorError::Decode("expected a sequence".into());

        presenter.list_error(&fixtures::address(), &err);

        let out = fixtures::output(presenter);
        assert!(out.contains("ERROR: provider unavailable"));
        assert!(out.contains("Malformed response: expected a sequence"));
    }

    #[test]
    fn fatal_error_is_printed() {
        let mut presenter = fixtures::capture();
        let err: crate::MonitorError = crate::Address::parse("bogus").unwrap_err().into();

        presenter.fatal(&err);

        let out = fixtures::output(presenter);
        assert!(out.contains("An error occurred: Validation error: Invalid Solana address format: bogus"));
    }

    #[test]
    fn write_failures_are_swallowed() {
        colored::control::set_override(false);
        let mut presenter = Presenter::new(BrokenPipe);
        let address = fixtures::address();
        let sig = fixtures::signature(9);

        presenter.banner(&address, "http://localhost:8899");
        presenter.transaction(&fixtures::record(&sig));
        presenter.not_found(&sig);
        presenter.fetch_error(&sig, &fixtures::transport_error("reset"));
        presenter.list_error(&address, &fixtures::transport_error("reset"));
        presenter.stopped();
    }
}
