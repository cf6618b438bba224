//! addrcore - 钱包客户端地址处理核心
//!
//! 校验和编码、地址展示、ENS 语法校验、本地身份解析、私钥导入桥接。
//! 不做链上查询，不生成密钥，不持久化。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use error::{AddressError, AddressErrorCode};

pub mod prelude {
    pub use crate::{
        domain::{
            is_valid_ens_name, render_full, render_short, render_slightly_long,
            resembles_address, resolve_name, safe_to_checksum, to_checksum, Identity,
            IdentityMap, DEFAULT_VISIBLE_CHARS,
        },
        error::{AddressError, AddressErrorCode},
        infrastructure::i18n::{Language, Localizer, StaticLocalizer},
        service::{ImportResult, ImportStrategy, KeyImportService, KeyringController},
    };
}
