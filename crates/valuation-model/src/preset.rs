/// A catalog entry used to pre-fill the subject name (and optional note tag) of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub note: Option<&'static str>,
}

impl Preset {
    pub const fn new(name: &'static str) -> Self {
        Self { name, note: None }
    }

    pub const fn tagged(name: &'static str, note: &'static str) -> Self {
        Self {
            name,
            note: Some(note),
        }
    }
}

/// Note tag marking securities; their values feed the stock totals.
pub const NOTE_STOCKS: &str = "株式等";
/// Note tag marking land and land rights; their values feed the land total.
pub const NOTE_LAND: &str = "土地等";

pub static ASSET_PRESETS: &[Preset] = &[
    Preset::new("現金預金"),
    Preset::new("受取手形"),
    Preset::new("売掛金"),
    Preset::tagged("有価証券", NOTE_STOCKS),
    Preset::new("商品・製品"),
    Preset::new("原材料"),
    Preset::new("前払費用"),
    Preset::new("貸付金"),
    Preset::new("建物"),
    Preset::new("構築物"),
    Preset::new("機械装置"),
    Preset::new("車両運搬具"),
    Preset::new("器具備品"),
    Preset::tagged("土地", NOTE_LAND),
    Preset::tagged("借地権", NOTE_LAND),
    Preset::new("電話加入権"),
    Preset::new("保険積立金"),
    Preset::new("死亡保険金"),
    Preset::new("その他の資産"),
];

pub static LIABILITY_PRESETS: &[Preset] = &[
    Preset::new("支払手形"),
    Preset::new("買掛金"),
    Preset::new("借入金"),
    Preset::new("未払金"),
    Preset::new("未払費用"),
    Preset::new("未払法人税等"),
    Preset::new("未払消費税等"),
    Preset::new("前受金"),
    Preset::new("預り金"),
    Preset::new("賞与引当金"),
    Preset::new("退職金"),
    Preset::new(INSURANCE_GAIN_TAX_SUBJECT),
    Preset::new("その他の負債"),
];

/// Liability subject that receives the computed tax on life insurance gains.
pub const INSURANCE_GAIN_TAX_SUBJECT: &str = "保険差益に対する法人税等";
