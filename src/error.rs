//! 错误类型定义
//!
//! 地址处理的类型化错误。缺省输入（None / 空串）不是错误，
//! 由各函数返回哨兵值处理；这里只覆盖格式错误的输入。

use thiserror::Error;

/// 错误码（稳定的字符串标识，供上层映射）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressErrorCode {
    InvalidLength,
    InvalidHex,
}

impl AddressErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressErrorCode::InvalidLength => "invalid_address_length",
            AddressErrorCode::InvalidHex => "invalid_address_hex",
        }
    }
}

/// 地址错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// 去掉 `0x` 前缀后不是 40 个字符
    #[error("invalid address length: expected 40 hex characters, got {0}")]
    InvalidLength(usize),

    /// 含有非十六进制字符
    #[error("invalid hex character {ch:?} at position {position}")]
    InvalidHex { ch: char, position: usize },
}

impl AddressError {
    pub fn code(&self) -> AddressErrorCode {
        match self {
            AddressError::InvalidLength(_) => AddressErrorCode::InvalidLength,
            AddressError::InvalidHex { .. } => AddressErrorCode::InvalidHex,
        }
    }
}

pub type AddressResult<T> = std::result::Result<T, AddressError>;
