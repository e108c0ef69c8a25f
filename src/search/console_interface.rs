use crate::search::Search;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::*;
use std::io;
use tracing::debug;

pub struct SearchRenderState<'a, 'b> {
    pub search: &'a Search<'b>,
    pub processed_since_last_render: usize,
    pub start_time: std::time::Instant,
    pub last_render_time: std::time::Instant,
    pub current_time: std::time::Instant,
}

pub fn render_search(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    render: SearchRenderState,
) -> Result<(), Box<dyn std::error::Error>> {

    let search_info = SearchInfo::new(render.search);

    let steps_per_second = if render.current_time == render.last_render_time {
        0.0
    } else {
        render.processed_since_last_render as f64 / (render.current_time - render.last_render_time).as_secs_f64()
    };
    let total_expanded_per_second = if render.start_time == render.current_time {
        0.0
    } else {
        search_info.expanded as f64
            / (render.current_time - render.start_time).as_secs_f64()
    };
    let time_description = format!(
        "Processed {} nodes since last render, {:?} since. {:.1} nodes/sec. Total {:.1} expanded/sec.",
        render.processed_since_last_render,
        render.current_time - render.last_render_time,
        steps_per_second,
        total_expanded_per_second
    );

    debug!("{}", search_info.to_log_string());

    let description = format!("{}\n{}\nPress q to abort.", search_info.to_human_string(), time_description);

    terminal.draw(|f| {
        let size = f.area();

        let paragraph = Paragraph::new(description)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search Progress"),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, size);
    })?;
    Ok(())
}

pub struct SearchInfo {
    pub expanded: usize,
    pub frontier: usize,
    pub generated: usize,
    pub duplicates: usize,
    pub pruned: usize,
    pub percent_pruned: f64,
}

impl SearchInfo {
    pub fn new(search: &Search) -> Self {
        let stats = search.stats();
        let considered = stats.generated + stats.pruned_deadlocks;
        let percent_pruned = if considered > 0 {
            (stats.pruned_deadlocks as f64 / considered as f64) * 100.0
        } else {
            0.0
        };
        Self {
            expanded: stats.expanded,
            frontier: search.frontier_len(),
            generated: stats.generated,
            duplicates: stats.duplicates,
            pruned: stats.pruned_deadlocks,
            percent_pruned,
        }
    }

    pub fn to_human_string(&self) -> String {
        format!(
            "Expanded {} states, {} queued, {} generated, {} duplicates, {} pruned as deadlocks ({:.1}%).",
            self.expanded, self.frontier, self.generated, self.duplicates, self.pruned, self.percent_pruned
        )
    }

    pub fn to_log_string(&self) -> String {
        format!(
            "expanded: {}, frontier: {}, generated: {}, duplicates: {}, pruned: {}",
            self.expanded, self.frontier, self.generated, self.duplicates, self.pruned
        )
    }
}
