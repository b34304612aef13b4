//! Typed view over a raw `getAccountInfo` result

use serde_json::Value;
use solana_account_decoder::UiAccount;
use solana_sdk::account::Account;

/// Fields of an account decoded from its base64 payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub lamports: u64,
    pub data_len: usize,
    pub executable: bool,
}

/// Decode `result.value` into an [`AccountSummary`].
///
/// Returns `None` when the value is null or is not shaped like a
/// `UiAccount` with decodable binary data.
pub fn parse_account_summary(result: &Value) -> Option<AccountSummary> {
    let value = result.get("value")?;
    if value.is_null() {
        return None;
    }

    let ui_account: UiAccount = serde_json::from_value(value.clone()).ok()?;
    let account: Account = ui_account.decode()?;

    Some(AccountSummary {
        lamports: account.lamports,
        data_len: account.data.len(),
        executable: account.executable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::blockchain::mock::account_json;
    use serde_json::json;

    const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    #[test]
    fn test_parse_base64_account() {
        let result = json!({
            "context": { "slot": 1 },
            "value": account_json(TOKEN_PROGRAM, "AQID")
        });

        let summary = parse_account_summary(&result).unwrap();
        assert_eq!(summary.lamports, 1_461_600);
        assert_eq!(summary.data_len, 3);
        assert!(!summary.executable);
    }

    #[test]
    fn test_null_value_has_no_summary() {
        let result = json!({ "context": { "slot": 1 }, "value": null });
        assert_eq!(parse_account_summary(&result), None);
    }

    #[test]
    fn test_partial_account_has_no_summary() {
        let result = json!({ "value": { "owner": TOKEN_PROGRAM } });
        assert_eq!(parse_account_summary(&result), None);
    }
}
