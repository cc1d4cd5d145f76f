use iced::widget::container::Id as ContainerId;
use once_cell::sync::Lazy;

/// Logical size of the card surface; exports are written at exactly this size.
pub(crate) const CARD_WIDTH_PX: f32 = 600.0;
pub(crate) const CARD_HEIGHT_PX: f32 = 900.0;
pub(crate) const CARD_PADDING_X_PX: f32 = 40.0;
pub(crate) const TITLE_MARGIN_PX: f32 = 16.0;
pub(crate) const EDITOR_HEIGHT_PX: f32 = 384.0;
pub(crate) const MIN_TITLE_FONT_SIZE: f32 = 1.0;
pub(crate) const MAX_TITLE_FONT_SIZE: f32 = 3.0;
pub(crate) const FONT_SIZE_STEP: f32 = 0.01;
pub(crate) const MIN_TIMEOUT_SECS: f32 = 1.0;
pub(crate) const MAX_TIMEOUT_SECS: f32 = 120.0;

pub(crate) const PROMPT_COPIED_MESSAGE: &str = "✅ GPT 指令已複製到剪貼簿！";
pub(crate) const PROMPT_FAILED_MESSAGE: &str =
    "❌ 複製失敗，請確認 gpt.txt 是否存在於 public 資料夾！";
pub(crate) const EXPORT_FAILED_MESSAGE: &str = "❌ 下載失敗，請稍後再試！";

pub(crate) static PREVIEW_ID: Lazy<ContainerId> = Lazy::new(|| ContainerId::new("card-preview"));

/// Reading shown when the editor starts without a text file.
pub(crate) const SAMPLE_TEXT: &str = "一、整體運勢分析
流年主數為「3」，象徵變動與新機會。今年要敢變、願變，突破就會來。
二、感情運勢
情感易起波動，先觀察再靠近，別被一時悸動牽著走。
三、工作事業運勢
工作變動多，記得靈活應對，轉個彎可能就是貴人。
四、財富運勢
財運平穩但破財機率高，控制衝動消費是關鍵。
開運水晶指引：
黃水晶助正財，藍虎眼穩定情緒，白水晶守心神、擋雜念。";
