// 国际化支持模块 - 基础实现

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 地址缺省时的占位文案 key
pub const TX_DETAILS_NOT_AVAILABLE: &str = "transactions.tx_details_not_available";

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Chinese,
    Japanese,
    Korean,
}

impl Language {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Language::Chinese,
            "ja" | "japanese" => Language::Japanese,
            "ko" | "korean" => Language::Korean,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }
}

/// 本地化文案查询接口
///
/// 地址核心只依赖这个 trait，宿主应用可以接入自己的文案系统。
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

static MESSAGES: Lazy<HashMap<&'static str, HashMap<Language, &'static str>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    let mut tx_details = HashMap::new();
    tx_details.insert(Language::English, "Transaction details not available");
    tx_details.insert(Language::Chinese, "交易详情不可用");
    tx_details.insert(Language::Japanese, "取引の詳細は利用できません");
    tx_details.insert(Language::Korean, "거래 세부 정보를 사용할 수 없습니다");
    map.insert(TX_DETAILS_NOT_AVAILABLE, tx_details);

    map
});

/// 内置静态文案表
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocalizer {
    lang: Language,
}

impl StaticLocalizer {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }
}

impl Localizer for StaticLocalizer {
    fn translate(&self, key: &str) -> String {
        get_message(key, self.lang)
    }
}

/// 获取本地化文案，缺失时回退英文，再缺失时原样返回 key
pub fn get_message(key: &str, lang: Language) -> String {
    MESSAGES
        .get(key)
        .and_then(|msgs| msgs.get(&lang).copied())
        .unwrap_or_else(|| {
            // Fallback to English
            MESSAGES
                .get(key)
                .and_then(|msgs| msgs.get(&Language::English).copied())
                .unwrap_or(key)
        })
        .to_string()
}
