//! 地址验证模块
//!
//! 调用方在 `to_checksum` 之前做预检查用

use crate::domain::checksum::{strip_hex_prefix, to_checksum, ADDRESS_HEX_LEN};

/// 地址验证器
pub struct AddressValidator;

impl AddressValidator {
    /// 验证地址格式：`0x` + 40 个十六进制字符
    pub fn is_valid_address(address: &str) -> bool {
        let Some(hex_part) = address.strip_prefix("0x") else {
            return false;
        };

        hex_part.len() == ADDRESS_HEX_LEN && hex_part.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// 验证EIP-55 Checksum
    ///
    /// 全小写或全大写视为未带校验和，直接通过；混合大小写必须与
    /// 校验和编码结果完全一致。
    pub fn verify_checksum(address: &str) -> bool {
        if !Self::is_valid_address(address) {
            return false;
        }

        let hex_part = strip_hex_prefix(address);
        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        if !(has_lower && has_upper) {
            return true;
        }

        match to_checksum(address) {
            Ok(checksummed) => checksummed == address,
            Err(_) => false,
        }
    }
}
