use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const BANNER: &str = r"
   ██████╗ ██╗  ██╗ ██████╗ ███████╗████████╗██╗   ██╗
  ██╔════╝ ██║  ██║██╔═══██╗██╔════╝╚══██╔══╝╚██╗ ██╔╝
  ██║  ███╗███████║██║   ██║███████╗   ██║    ╚████╔╝
  ██║   ██║██╔══██║██║   ██║╚════██║   ██║     ╚██╔╝
  ╚██████╔╝██║  ██║╚██████╔╝███████║   ██║      ██║
   ╚═════╝ ╚═╝  ╚═╝ ╚═════╝ ╚══════╝   ╚═╝      ╚═╝
";

pub const ALTERNATE_BANNER: &str = r"
       ________.__                    __
      /  _____/|  |__   ____  _______/  |_ ___.__.
     /   \  ___|  |  \ /  _ \/  ___/\   __<   |  |
     \    \_\  \   Y  (  <_> )___ \  |  |  \___  |
      \______  /___|  /\____/____  > |__|  / ____|
             \/     \/           \/        \/
";

const TAGLINE: &str = "[ Ghosty - The ghost in your machine ]";
const CREDIT: &str = "[ Made with love - By AK ]";

/// Taglines are centered in a column this wide
const BANNER_WIDTH: usize = 56;

fn art(alternate: bool) -> &'static str {
    if alternate { ALTERNATE_BANNER } else { BANNER }
}

/// Banner lines, each colored start-to-end across its own width, then the
/// two taglines. Empty when the banner is hidden.
pub fn banner_lines(app: &App) -> Vec<Line<'static>> {
    if app.config.hide_banner {
        return Vec::new();
    }
    let theme = app.theme;
    let mut lines: Vec<Line> = art(app.config.alternate_banner)
        .lines()
        .map(|line| gradient_line(line, theme))
        .collect();

    lines.push(Line::from(Span::styled(
        center(TAGLINE),
        Style::default()
            .fg(theme.ghost_purple.to_tui())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        center(CREDIT),
        Style::default().fg(theme.shadow_blue.to_tui()),
    )));
    lines
}

fn gradient_line(line: &str, theme: &Theme) -> Line<'static> {
    let colors = theme.banner_gradient(line.chars().count());
    line.chars()
        .zip(colors)
        .map(|(ch, color)| Span::styled(ch.to_string(), Style::default().fg(color.to_tui())))
        .collect::<Vec<_>>()
        .into()
}

fn center(text: &str) -> String {
    format!("{:^width$}", text, width = BANNER_WIDTH)
}

pub fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Paragraph::new(banner_lines(app)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn default_banner_with_taglines() {
        let app = App::new(Box::new(MemoryStore::new()));
        let lines = banner_lines(&app);
        // blank first line, six rows of art, two taglines
        assert_eq!(lines.len(), 9);
        let output = render_to_string(TERM_W, 10, |frame, area| {
            render_banner(frame, &app, area);
        });
        assert!(output.contains("██████╗ ██╗  ██╗"));
        let tagline = format!("{}{}", " ".repeat(9), TAGLINE);
        assert!(output.lines().any(|l| l == tagline));
        assert!(output.contains("[ Made with love - By AK ]"));
    }

    #[test]
    fn alternate_and_hidden() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        app.config.alternate_banner = true;
        let output = render_to_string(TERM_W, 10, |frame, area| {
            render_banner(frame, &app, area);
        });
        assert!(output.contains("________.__"));
        assert!(!output.contains("██"));

        app.config.hide_banner = true;
        assert!(banner_lines(&app).is_empty());
    }

    #[test]
    fn gradient_runs_across_each_line() {
        let theme = Theme::default();
        let line = gradient_line("abc", &theme);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].style.fg, Some(theme.banner_start.to_tui()));
        assert_eq!(line.spans[2].style.fg, Some(theme.banner_end.to_tui()));
    }
}
