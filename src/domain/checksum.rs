//! EIP-55 校验和编码
//!
//! https://eips.ethereum.org/EIPS/eip-55
//!
//! 对小写十六进制地址文本（不是二进制地址）做 Keccak-256，
//! 按摘要对应 nibble 决定每个字母的大小写。

use sha3::{Digest, Keccak256};

use crate::error::{AddressError, AddressResult};

/// 地址十六进制主体长度（20字节）
pub const ADDRESS_HEX_LEN: usize = 40;

/// 去掉 `0x` / `0X` 前缀
pub fn strip_hex_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
}

/// 转换为 EIP-55 校验和地址
///
/// 输入大小写不敏感，`0x` 前缀可选。长度或字符不合法时返回错误，
/// 调用方应先用 `safe_to_checksum` 处理缺省值。
pub fn to_checksum(address: &str) -> AddressResult<String> {
    let body = strip_hex_prefix(address);

    if body.len() != ADDRESS_HEX_LEN {
        return Err(AddressError::InvalidLength(body.chars().count()));
    }
    if let Some((position, ch)) = body.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex { ch, position });
    }

    let hex_body = body.to_ascii_lowercase();
    let hash = Keccak256::digest(hex_body.as_bytes());

    let mut checksummed = String::with_capacity(ADDRESS_HEX_LEN + 2);
    checksummed.push_str("0x");
    for (i, ch) in hex_body.chars().enumerate() {
        let hash_byte = hash[i / 2];
        let nibble = if i % 2 == 0 {
            hash_byte >> 4
        } else {
            hash_byte & 0x0f
        };

        if ch.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(ch.to_ascii_uppercase());
        } else {
            checksummed.push(ch);
        }
    }

    Ok(checksummed)
}

/// 缺省安全版本：None 或空串返回 `Ok(None)`
pub fn safe_to_checksum(address: Option<&str>) -> AddressResult<Option<String>> {
    match address {
        Some(addr) if !addr.is_empty() => to_checksum(addr).map(Some),
        _ => Ok(None),
    }
}

/// 长度是否像一个以太坊地址（`0x` + 40 个字符）
///
/// 只检查长度，不检查字符集。长度按 UTF-16 code unit 计，
/// 与宿主界面层（JS 字符串）保持一致。
pub fn resembles_address(address: &str) -> bool {
    address.encode_utf16().count() == 2 + 20 * 2
}
