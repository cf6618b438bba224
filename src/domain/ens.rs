//! ENS 名称语法校验
//!
//! 只校验形式，不做链上解析。两道检查都必须通过：
//! 1. punycode 规范化后匹配域名文法
//! 2. 在原始输入上截取最后一个 `.` 之后的后缀，必须非空
//!
//! 两者可能给出不同结论（例如全角句号只被第一道识别为分隔符），
//! 任一失败即判为无效。

use once_cell::sync::Lazy;
use regex::Regex;

// 每段只含 a-z、0-9 和连字符，连字符不在段首尾；TLD 至少 2 个字符
static ENS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[-a-z0-9]*[a-z0-9])?\.)+[a-z0-9][-a-z0-9]*[a-z0-9]$")
        .expect("ENS pattern is a valid regex")
});

const ACE_PREFIX: &str = "xn--";

fn is_label_separator(c: char) -> bool {
    matches!(c, '.' | '\u{3002}' | '\u{FF0E}' | '\u{FF61}')
}

/// 转为 ASCII 形式：仅含非 ASCII 字符的段做 punycode 编码
///
/// 大小写保持不变。编码失败（溢出）时返回 `None`，调用方按无效名称处理。
pub fn to_ascii(name: &str) -> Option<String> {
    to_ascii_with(name, idna::punycode::encode_str)
}

fn to_ascii_with<F>(name: &str, encode: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let labels: Option<Vec<String>> = name
        .split(is_label_separator)
        .map(|label| {
            if label.is_ascii() {
                Some(label.to_string())
            } else {
                encode(label).map(|encoded| format!("{}{}", ACE_PREFIX, encoded))
            }
        })
        .collect();

    labels.map(|labels| labels.join("."))
}

fn check_both(name: &str, ascii: Option<String>) -> bool {
    let matched = match ascii {
        Some(ascii) => ENS_PATTERN.is_match(&ascii.to_lowercase()),
        None => false,
    };

    let has_tld = match name.rfind('.') {
        Some(index) if index >= 1 => !name[index + 1..].to_lowercase().is_empty(),
        _ => false,
    };

    if !matched || !has_tld {
        tracing::trace!(matched, has_tld, "ens name rejected");
        return false;
    }
    true
}

/// 校验 ENS 名称语法
pub fn is_valid_ens_name(name: Option<&str>) -> bool {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return false,
    };

    check_both(name, to_ascii(name))
}
