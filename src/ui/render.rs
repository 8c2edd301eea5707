use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::global_style::GlobalStyle;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, style: &GlobalStyle) {
    let area = frame.area();
    frame.render_widget(Block::default().style(style.base_style()), area);

    let (body, footer) = layout_regions(style.page_area(area));

    let carousel = app.carousel();
    frame.render_widget(carousel.widget(app.theme(), app.icons()), body);

    let state = carousel.state();
    let position = state.selected().map(|index| (index + 1, state.len()));
    let selected_id = carousel.selected_item().map(|item| item.id.as_str());
    frame.render_widget(Footer::new(position, selected_id).widget(footer), footer);
}
