use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::route::Route;
use crate::ui::views::{render_delete_confirm, render_index, render_new_post, render_show};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let posts = app.store().posts();

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(&app.route().path(), posts.len()), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Index => render_index(frame, body, posts, app.selection()),
        Route::Show(_) => {
            render_show(frame, body, app.current_post());
            if app.is_confirming_delete() {
                render_delete_confirm(frame, body, app.current_post());
            }
        }
        Route::New => render_new_post(frame, body, app.form()),
    }

    let footer_widget = Footer::new();
    frame.render_widget(
        footer_widget.widget(footer, app.route(), app.last_error()),
        footer,
    );
}
