//! 本地身份（账户名）解析
//!
//! 不变量：`IdentityMap` 的 key 一律是校验和地址。插入时规范化，
//! 查询时也先规范化，因此调用方传入任意大小写都能命中。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::checksum::{safe_to_checksum, to_checksum};
use crate::domain::display::{render_short, DEFAULT_VISIBLE_CHARS};
use crate::error::AddressResult;

/// 本地已知账户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }
}

/// 地址 -> 身份映射（key 为校验和地址）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentityMap {
    entries: HashMap<String, Identity>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入身份，key 自动转为校验和形式
    pub fn insert(&mut self, address: &str, identity: Identity) -> AddressResult<Option<Identity>> {
        let key = to_checksum(address)?;
        Ok(self.entries.insert(key, identity))
    }

    /// 按校验和地址精确查找（大小写敏感）
    pub fn get(&self, checksummed: &str) -> Option<&Identity> {
        self.entries.get(checksummed)
    }

    pub fn contains(&self, checksummed: &str) -> bool {
        self.entries.contains_key(checksummed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 从任意大小写 key 的映射构建，逐个规范化
    pub fn from_raw(raw: HashMap<String, Identity>) -> AddressResult<Self> {
        let mut map = Self::new();
        for (address, identity) in raw {
            map.insert(&address, identity)?;
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for IdentityMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = HashMap::<String, Identity>::deserialize(deserializer)?;
        IdentityMap::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

/// 解析地址对应的账户名
///
/// 命中本地身份时返回名字，否则回退到短地址。地址缺省时返回 `None`。
pub fn resolve_name(
    address: Option<&str>,
    identities: Option<&IdentityMap>,
) -> AddressResult<Option<String>> {
    let normalized = safe_to_checksum(address)?;

    if let (Some(map), Some(addr)) = (identities, normalized.as_deref()) {
        if let Some(identity) = map.get(addr) {
            return Ok(Some(identity.name.clone()));
        }
    }

    render_short(normalized.as_deref(), DEFAULT_VISIBLE_CHARS)
}
