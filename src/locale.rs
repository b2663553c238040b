// Locale tables for channel colours and panel headers

/// Page language. Selected by config, overridable per request via the lang
/// query param; unknown values fall back to the config default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Header strings for the dashboard and detail pages.
pub struct Headers {
    pub item_info_title: &'static str,
    pub item_detail_info_title: &'static str,
    pub fluid_detail_info_title: &'static str,
    pub channel: &'static str,
    pub queue_size: &'static str,
    pub fluid_info_title: &'static str,
    pub fluid_type: &'static str,
    pub energy_info_title: &'static str,
    pub energy_amount: &'static str,
    pub mod_id: &'static str,
    pub item_name: &'static str,
    pub fluid_name: &'static str,
    pub amount: &'static str,
    pub client_host_name: &'static str,
}

const HEADERS_EN: Headers = Headers {
    item_info_title: "Item Information",
    item_detail_info_title: "Item Detail Information",
    fluid_detail_info_title: "Fluid Detail Information",
    channel: "Channel",
    queue_size: "Queue Size",
    fluid_info_title: "Fluid Information",
    fluid_type: "Fluid Type",
    energy_info_title: "Energy Information",
    energy_amount: "Amount",
    mod_id: "Mod ID",
    item_name: "Item ID",
    fluid_name: "Fluid ID",
    amount: "Amount",
    client_host_name: "ServerName",
};

const HEADERS_JA: Headers = Headers {
    item_info_title: "アイテム情報",
    item_detail_info_title: "チャンネル内アイテム情報",
    fluid_detail_info_title: "チャンネル内液体情報",
    channel: "チャンネル",
    queue_size: "待ちキュー数",
    fluid_info_title: "液体情報",
    fluid_type: "液体種類",
    energy_info_title: "エネルギー情報",
    energy_amount: "量",
    mod_id: "Mod ID",
    item_name: "アイテムID",
    fluid_name: "液体ID",
    amount: "量",
    client_host_name: "サーバー名",
};

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }

    /// Language code used in page links.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    pub fn headers(self) -> &'static Headers {
        match self {
            Locale::En => &HEADERS_EN,
            Locale::Ja => &HEADERS_JA,
        }
    }

    /// Display name of a channel colour id; unknown ids show as-is.
    pub fn colour_label<'a>(self, id: &'a str) -> &'a str {
        match self {
            Locale::En => match id {
                "white" => "White",
                "orange" => "Orange",
                "magenta" => "Magenta",
                "light_blue" => "Light Blue",
                "yellow" => "Yellow",
                "lime" => "Lime",
                "pink" => "Pink",
                "gray" => "Gray",
                "light_gray" => "Light Gray",
                "cyan" => "Cyan",
                "purple" => "Purple",
                "blue" => "Blue",
                "brown" => "Brown",
                "green" => "Green",
                "red" => "Red",
                "black" => "Black",
                other => other,
            },
            Locale::Ja => match id {
                "white" => "白",
                "orange" => "橙",
                "magenta" => "赤紫",
                "light_blue" => "空",
                "yellow" => "黄",
                "lime" => "黄緑",
                "pink" => "桃",
                "gray" => "灰",
                "light_gray" => "薄灰",
                "cyan" => "青緑",
                "purple" => "紫",
                "blue" => "青",
                "brown" => "茶",
                "green" => "緑",
                "red" => "赤",
                "black" => "黒",
                other => other,
            },
        }
    }
}
