//! 测试辅助模块
//! 提供测试向量和 keyring 替身

use addrcore::domain::{Identity, IdentityMap};
use addrcore::service::key_import::{ImportResult, ImportStrategy, KeyMaterial, KeyringController};
use async_trait::async_trait;
use tokio::sync::Mutex;

pub const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const VITALIK_LOWER: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

/// 已知身份：key 用小写地址写入，验证插入时规范化
pub fn vitalik_identities() -> IdentityMap {
    let mut map = IdentityMap::new();
    map.insert(VITALIK_LOWER, Identity::new("vitalik"))
        .expect("test vector is a valid address");
    map
}

/// 内存 keyring：只接受 64 位十六进制私钥
#[derive(Default)]
pub struct MemoryKeyring {
    imported: Mutex<Vec<String>>,
}

impl MemoryKeyring {
    pub async fn imported(&self) -> Vec<String> {
        self.imported.lock().await.clone()
    }
}

#[async_trait]
impl KeyringController for MemoryKeyring {
    async fn import_account_with_strategy(
        &self,
        strategy: ImportStrategy,
        args: Vec<KeyMaterial>,
    ) -> anyhow::Result<ImportResult> {
        anyhow::ensure!(strategy == ImportStrategy::PrivateKey, "unsupported strategy");
        let key = args
            .first()
            .ok_or_else(|| anyhow::anyhow!("missing private key"))?;

        if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Cannot import invalid private key: expected 64 hex characters");
        }

        self.imported.lock().await.push(key.as_str().to_owned());
        Ok(ImportResult {
            address: format!("0x{}", &key.as_str()[..40]),
        })
    }
}
