//! 私钥导入桥接
//!
//! 只做前缀规范化，然后把私钥原样交给外部 keyring 服务。
//! 不校验十六进制格式，不重试，不设超时；错误原样返回给调用方。

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::infrastructure::log_redact::{redact_hex_string, redact_private_key};

/// 带 `0x` 前缀的私钥长度
const PREFIXED_KEY_LEN: usize = 66;

/// 传给 keyring 的密钥材料，drop 时清零
pub type KeyMaterial = Zeroizing<String>;

/// 导入策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportStrategy {
    #[serde(rename = "privateKey")]
    PrivateKey,
}

impl ImportStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStrategy::PrivateKey => "privateKey",
        }
    }
}

impl fmt::Display for ImportStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 导入结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    /// 导入后的账户地址
    pub address: String,
}

/// 外部账户管理（keyring）服务接口
#[async_trait]
pub trait KeyringController: Send + Sync {
    /// 按策略导入账户
    async fn import_account_with_strategy(
        &self,
        strategy: ImportStrategy,
        args: Vec<KeyMaterial>,
    ) -> Result<ImportResult>;
}

/// 规范化私钥：恰好 66 个字符且以 `0x` 开头时去掉前缀，其余原样保留
///
/// 长度按 UTF-16 code unit 计。
pub fn normalize_private_key(raw_key: &str) -> &str {
    if raw_key.encode_utf16().count() == PREFIXED_KEY_LEN {
        if let Some(stripped) = raw_key.strip_prefix("0x") {
            return stripped;
        }
    }
    raw_key
}

/// 私钥导入服务（keyring 通过构造函数注入）
#[derive(Clone)]
pub struct KeyImportService {
    keyring: Arc<dyn KeyringController>,
}

impl KeyImportService {
    pub fn new(keyring: Arc<dyn KeyringController>) -> Self {
        Self { keyring }
    }

    /// 导入私钥
    pub async fn import_from_private_key(&self, raw_key: &str) -> Result<ImportResult> {
        let key: KeyMaterial = Zeroizing::new(normalize_private_key(raw_key).to_string());
        tracing::info!(
            strategy = %ImportStrategy::PrivateKey,
            key = %redact_private_key(raw_key),
            "importing account"
        );

        match self
            .keyring
            .import_account_with_strategy(ImportStrategy::PrivateKey, vec![key])
            .await
        {
            Ok(result) => {
                tracing::info!(address = %redact_hex_string(&result.address, 6), "account imported");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "keyring rejected private key import");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingKeyring {
        calls: Mutex<Vec<(ImportStrategy, Vec<String>)>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl KeyringController for RecordingKeyring {
        async fn import_account_with_strategy(
            &self,
            strategy: ImportStrategy,
            args: Vec<KeyMaterial>,
        ) -> Result<ImportResult> {
            self.calls
                .lock()
                .await
                .push((strategy, args.iter().map(|a| a.as_str().to_owned()).collect()));
            if let Some(msg) = &self.fail_with {
                anyhow::bail!("{}", msg);
            }
            Ok(ImportResult {
                address: "0x19E7E376E7C213B7E7e7e46cc70A5dD086DAff2A".to_string(),
            })
        }
    }

    #[test]
    fn test_normalize_private_key() {
        let bare = "11".repeat(32);
        let prefixed = format!("0x{}", bare);
        assert_eq!(normalize_private_key(&prefixed), bare);
        assert_eq!(normalize_private_key(&bare), bare);
        // 长度不是 66 时不去前缀
        assert_eq!(normalize_private_key("0xabcd"), "0xabcd");
        assert_eq!(normalize_private_key(&format!("0X{}", bare)), format!("0X{}", bare));
    }

    #[test]
    fn test_normalize_private_key_counts_utf16_units() {
        // 66 个 UTF-8 字节但只有 65 个 UTF-16 code unit：不去前缀
        let short = format!("0x{}é", "1".repeat(62));
        assert_eq!(short.len(), 66);
        assert_eq!(normalize_private_key(&short), short);

        // 66 个 UTF-16 code unit：去前缀后交给 keyring 拒绝
        let odd = format!("0x{}é", "1".repeat(63));
        assert_eq!(normalize_private_key(&odd), &odd[2..]);
    }

    #[tokio::test]
    async fn test_import_strips_prefix() {
        let keyring = Arc::new(RecordingKeyring::default());
        let service = KeyImportService::new(keyring.clone());

        let bare = "11".repeat(32);
        let result = service
            .import_from_private_key(&format!("0x{}", bare))
            .await
            .unwrap();
        assert_eq!(result.address, "0x19E7E376E7C213B7E7e7e46cc70A5dD086DAff2A");

        service.import_from_private_key(&bare).await.unwrap();

        let calls = keyring.calls.lock().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (ImportStrategy::PrivateKey, vec![bare.clone()]));
        assert_eq!(calls[1], (ImportStrategy::PrivateKey, vec![bare]));
    }

    #[tokio::test]
    async fn test_import_passes_malformed_key_through() {
        let keyring = Arc::new(RecordingKeyring::default());
        let service = KeyImportService::new(keyring.clone());

        service.import_from_private_key("not-a-key").await.unwrap();

        let calls = keyring.calls.lock().await;
        assert_eq!(calls[0].1, vec!["not-a-key".to_string()]);
    }

    #[tokio::test]
    async fn test_import_propagates_keyring_error() {
        let keyring = Arc::new(RecordingKeyring {
            fail_with: Some("Cannot import invalid private key.".to_string()),
            ..Default::default()
        });
        let service = KeyImportService::new(keyring.clone());

        let err = service.import_from_private_key("zz").await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot import invalid private key.");
        // 不重试
        assert_eq!(keyring.calls.lock().await.len(), 1);
    }

    #[test]
    fn test_strategy_tag() {
        assert_eq!(ImportStrategy::PrivateKey.to_string(), "privateKey");
        assert_eq!(
            serde_json::to_string(&ImportStrategy::PrivateKey).unwrap(),
            "\"privateKey\""
        );
    }
}
