//! 字符串工具模块
//! 按字符（而非字节）截取，越界时自然退化为整串

/// 取前 `count` 个字符；超过长度时返回整串
pub fn head(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// 取后 `count` 个字符；超过长度时返回整串
///
/// `count == 0` 时同样返回整串（与 `substr(-0)` 一致）。
pub fn tail(s: &str, count: usize) -> &str {
    if count == 0 {
        return s;
    }
    let len = s.chars().count();
    if count >= len {
        return s;
    }
    match s.char_indices().nth(len - count) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
