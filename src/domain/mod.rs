//! Domain 模块
//!
//! 地址处理的纯函数：校验和编码、展示格式、身份解析、ENS 语法校验

pub mod checksum;
pub mod display;
pub mod ens;
pub mod identity;

// 重新导出常用类型
pub use checksum::{resembles_address, safe_to_checksum, to_checksum};
pub use display::{render_full, render_short, render_slightly_long, DEFAULT_VISIBLE_CHARS};
pub use ens::is_valid_ens_name;
pub use identity::{resolve_name, Identity, IdentityMap};
