//! 日志脱敏
//! 私钥等敏感十六进制串进入日志前必须先经过这里

/// 脱敏十六进制字符串（显示前缀和后缀）
pub fn redact_hex_string(hex: &str, show_chars: usize) -> String {
    if hex.len() <= show_chars * 2 || !hex.is_ascii() {
        return "*".repeat(hex.chars().count());
    }

    let prefix = &hex[..show_chars];
    let suffix = &hex[hex.len() - show_chars..];
    format!("{}...{}", prefix, suffix)
}

/// 私钥只记录长度和是否带前缀，不暴露任何字符
pub fn redact_private_key(key: &str) -> String {
    format!(
        "<private key: {} chars{}>",
        key.len(),
        if key.starts_with("0x") { ", 0x-prefixed" } else { "" }
    )
}
