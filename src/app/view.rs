use super::messages::Message;
use super::state::{
    Alert, AlertKind, App, CARD_HEIGHT_PX, CARD_PADDING_X_PX, CARD_WIDTH_PX, EDITOR_HEIGHT_PX,
    FONT_SIZE_STEP, MAX_TITLE_FONT_SIZE, MIN_TITLE_FONT_SIZE, PREVIEW_ID, TITLE_MARGIN_PX,
};
use crate::config::FontWeight;
use crate::paragraphs::{
    LINE_HEIGHT, MAX_BODY_FONT_SIZE, MAX_CONTENT_WIDTH_PX, MIN_BODY_FONT_SIZE, StyledParagraph,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{
    Column, button, center, column, container, image, mouse_area, opaque, row, scrollable, slider,
    stack, text, text_editor, text_input,
};
use iced::{Color, ContentFit, Element, Length, Padding};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let layout = row![self.editor_panel(), self.preview_panel()]
            .spacing(32)
            .padding(24)
            .align_y(Vertical::Top);

        let base = scrollable(container(layout).width(Length::Fill)).height(Length::Fill);

        match &self.alert {
            Some(alert) => stack![base, self.alert_overlay(alert)].into(),
            None => base.into(),
        }
    }
}

impl App {
    fn editor_panel(&self) -> Element<'_, Message> {
        let name_input = text_input("請輸入名字，例如 阿杰、小茵", &self.settings.recipient_name)
            .on_input(Message::RecipientNameChanged)
            .padding(8);

        let editor = text_editor(&self.editor)
            .on_action(Message::TextEdited)
            .height(Length::Fixed(EDITOR_HEIGHT_PX));

        let body_size = column![
            text(format!(
                "內文字體大小：{:.2}rem",
                self.settings.body_font_size
            )),
            slider(
                MIN_BODY_FONT_SIZE..=MAX_BODY_FONT_SIZE,
                self.settings.body_font_size,
                Message::BodyFontSizeChanged,
            )
            .step(FONT_SIZE_STEP)
        ]
        .spacing(4);

        let mut panel: Column<'_, Message> = column![
            text("輸入命理文字").size(22.0),
            row![text("受贈者名稱："), name_input]
                .spacing(8)
                .align_y(Vertical::Center),
            editor,
            body_size,
        ]
        .spacing(16)
        .width(Length::Fill);

        if self.config.variant.shows_title_slider() {
            panel = panel.push(
                column![
                    text(format!(
                        "標題字體大小：{:.2}rem",
                        self.settings.title_font_size
                    )),
                    slider(
                        MIN_TITLE_FONT_SIZE..=MAX_TITLE_FONT_SIZE,
                        self.settings.title_font_size,
                        Message::TitleFontSizeChanged,
                    )
                    .step(FONT_SIZE_STEP)
                ]
                .spacing(4),
            );
        }

        let copy_button = button(if self.prompt.loading {
            "讀取中…"
        } else {
            "複製 GPT 指令"
        })
        .on_press_maybe((!self.prompt.loading).then_some(Message::CopyPromptRequested));
        panel = panel.push(copy_button);

        container(panel).width(Length::FillPortion(1)).into()
    }

    fn preview_panel(&self) -> Element<'_, Message> {
        let in_flight = self.export.in_flight();
        let export_button = button(if in_flight {
            "下載中…"
        } else {
            "下載命理小卡"
        })
        .on_press_maybe((!in_flight).then_some(Message::ExportRequested));

        let status = match &self.export.last_saved {
            Some(path) => text(format!("已儲存：{}", path.display())).size(14.0),
            None => text("").size(14.0),
        };

        column![
            text("命理小卡預覽").size(22.0),
            self.card_preview(),
            row![export_button, status]
                .spacing(12)
                .align_y(Vertical::Center),
        ]
        .spacing(16)
        .width(Length::Fixed(CARD_WIDTH_PX))
        .into()
    }

    /// The card surface that gets exported.
    fn card_preview(&self) -> Element<'_, Message> {
        let background = image(self.background.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill);

        let title = text(self.card_title())
            .size(self.rem(self.settings.title_font_size))
            .color(self.text_color)
            .font(self.card_font(FontWeight::Normal))
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let mut content: Column<'_, Message> = column![
            container(title).padding(Padding {
                top: TITLE_MARGIN_PX,
                bottom: TITLE_MARGIN_PX,
                ..Padding::ZERO
            })
        ]
        .width(Length::Fill)
        .max_width(MAX_CONTENT_WIDTH_PX)
        .align_x(Horizontal::Center);

        for paragraph in self.styled_paragraphs() {
            content = content.push(self.paragraph_view(paragraph));
        }

        let surface = stack![
            background,
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(Padding {
                    left: CARD_PADDING_X_PX,
                    right: CARD_PADDING_X_PX,
                    ..Padding::ZERO
                })
                .align_x(Horizontal::Center)
                .align_y(Vertical::Top),
        ];

        container(surface)
            .id(PREVIEW_ID.clone())
            .width(Length::Fixed(CARD_WIDTH_PX))
            .height(Length::Fixed(CARD_HEIGHT_PX))
            .clip(true)
            .into()
    }

    fn paragraph_view(&self, paragraph: StyledParagraph) -> Element<'_, Message> {
        let margin = self.rem(paragraph.margin_bottom_rem);
        let line = text(format!("{}{}", paragraph.indent.prefix(), paragraph.content))
            .size(self.rem(paragraph.font_size_rem))
            .line_height(LineHeight::Relative(LINE_HEIGHT))
            .wrapping(Wrapping::WordOrGlyph)
            .color(self.text_color)
            .font(self.card_font(paragraph.font_weight))
            .width(Length::Fill)
            .align_x(Horizontal::Left);

        container(line)
            .width(Length::Fill)
            .padding(Padding {
                bottom: margin,
                ..Padding::ZERO
            })
            .into()
    }

    fn alert_overlay<'a>(&self, alert: &'a Alert) -> Element<'a, Message> {
        let accent = match alert.kind {
            AlertKind::Success => Color::from_rgb8(0x2e, 0x7d, 0x32),
            AlertKind::Failure => Color::from_rgb8(0xc6, 0x28, 0x28),
        };

        let dialog = container(
            column![
                text(alert.message.as_str()).size(18.0).color(accent),
                button("確定").on_press(Message::DismissAlert),
            ]
            .spacing(16)
            .align_x(Horizontal::Center),
        )
        .padding(24)
        .max_width(420.0)
        .style(container::rounded_box);

        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.5,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(Message::DismissAlert),
        )
    }

    fn card_title(&self) -> String {
        format!(
            "{}{}",
            self.settings.recipient_name, self.config.title_suffix
        )
    }
}
