//! 地址展示格式化
//!
//! 所有格式都基于校验和地址，截取窗口不做额外边界处理：
//! 窗口超过地址长度时直接得到整串。

use crate::domain::checksum::{safe_to_checksum, to_checksum};
use crate::error::AddressResult;
use crate::infrastructure::i18n::{Localizer, TX_DETAILS_NOT_AVAILABLE};
use crate::utils::string_utils::{head, tail};

/// 默认首尾显示字符数
pub const DEFAULT_VISIBLE_CHARS: usize = 4;

const ELLIPSIS: &str = "...";

fn truncate_middle(checksummed: &str, head_len: usize, tail_len: usize) -> String {
    format!(
        "{}{}{}",
        head(checksummed, head_len),
        ELLIPSIS,
        tail(checksummed, tail_len)
    )
}

/// 短格式：`0x` + 前 `chars` 位 + `...` + 后 `chars` 位
///
/// 地址缺省（None 或空串）时原样返回输入。
pub fn render_short(address: Option<&str>, chars: usize) -> AddressResult<Option<String>> {
    match address {
        Some(addr) if !addr.is_empty() => {
            let checksummed = to_checksum(addr)?;
            Ok(Some(truncate_middle(&checksummed, chars.saturating_add(2), chars)))
        }
        _ => Ok(address.map(str::to_owned)),
    }
}

/// 稍长格式：头部窗口为 `chars + 20`
pub fn render_slightly_long(
    address: Option<&str>,
    chars: usize,
) -> AddressResult<Option<String>> {
    match address {
        Some(addr) if !addr.is_empty() => {
            let checksummed = to_checksum(addr)?;
            Ok(Some(truncate_middle(&checksummed, chars.saturating_add(20), chars)))
        }
        _ => Ok(address.map(str::to_owned)),
    }
}

/// 完整校验和地址；缺省时返回本地化占位文案
pub fn render_full(address: Option<&str>, localizer: &dyn Localizer) -> AddressResult<String> {
    match safe_to_checksum(address)? {
        Some(checksummed) => Ok(checksummed),
        None => {
            tracing::debug!("address absent, rendering placeholder");
            Ok(localizer.translate(TX_DETAILS_NOT_AVAILABLE))
        }
    }
}
