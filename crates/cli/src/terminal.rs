//! Terminal front-end for the browser controller.
//!
//! Renders are buffered: the controller may render several times while the
//! command line is being applied, and only the final page is printed by
//! [`TerminalView::present`]. Errors go to stderr immediately.

use browser::{ArtistDetail, View};
use catalog::Artist;
use colored::Colorize;
use filter_engine::StatsDisplay;

/// Locations and members previewed on a list card
const CARD_PREVIEW: usize = 3;

/// One line of the artist list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub creation_date: i32,
    pub members_label: String,
    pub locations: String,
    pub members: String,
}

impl Card {
    pub fn from_artist(artist: &Artist) -> Self {
        let count = artist.member_count();
        let locations: Vec<String> = artist.normalized_locations().take(CARD_PREVIEW).collect();

        let mut members: Vec<String> = artist.members.iter().take(CARD_PREVIEW).cloned().collect();
        if count > CARD_PREVIEW {
            members.push(format!("+{}", count - CARD_PREVIEW));
        }

        Self {
            id: artist.id,
            name: artist.name.clone(),
            creation_date: artist.creation_date,
            members_label: format!("{} {}", count, if count > 1 { "members" } else { "member" }),
            locations: if locations.is_empty() {
                "No locations".to_string()
            } else {
                locations.join(" • ")
            },
            members: members.join(", "),
        }
    }
}

enum Page {
    Empty,
    List,
    Detail,
}

pub struct TerminalView {
    page: Page,
    cards: Vec<Card>,
    stats: Option<StatsDisplay>,
    detail: Option<ArtistDetail>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            page: Page::Empty,
            cards: Vec::new(),
            stats: None,
            detail: None,
        }
    }

    /// Print the current page to stdout
    pub fn present(&self) {
        match self.page {
            Page::Empty => {}
            Page::List => self.present_list(),
            Page::Detail => self.present_detail(),
        }
    }

    /// Print only the stats header
    pub fn present_stats(&self) {
        if let Some(stats) = &self.stats {
            println!("{}", "Artists".bold().blue());
            println!("{}Count: {}", "• ".cyan(), stats.count);
            println!("{}Average creation year: {}", "• ".cyan(), stats.avg_creation_year);
            println!("{}Average members: {}", "• ".cyan(), stats.avg_members);
            println!("{}Oldest: {}", "• ".cyan(), stats.oldest);
        }
    }

    fn present_list(&self) {
        if let Some(stats) = &self.stats {
            println!("{}", stats.to_string().bold().blue());
        }
        if self.cards.is_empty() {
            println!("{}", "No artist matches your search.".yellow());
            return;
        }
        for card in &self.cards {
            println!(
                "{:>3}. {} [{}] ({})",
                card.id.to_string().green(),
                card.name.bold(),
                card.creation_date,
                card.members_label
            );
            println!("     {}", card.locations.dimmed());
            println!("     {}", card.members);
        }
    }

    fn present_detail(&self) {
        let Some(detail) = &self.detail else {
            return;
        };
        println!("{}", detail.name.bold().blue());
        println!("{}Created in {}", "• ".green(), detail.creation_date);
        println!("{}First album: {}", "• ".green(), detail.first_album);
        println!("{}{} members", "• ".green(), detail.members.len());

        println!("{}", "Members:".bold());
        for member in &detail.members {
            println!("  - {}", member);
        }
        if !detail.locations.is_empty() {
            println!("{}", "Concert locations:".bold());
            for location in &detail.locations {
                println!("  - {}", location);
            }
        }
        if !detail.concert_dates.is_empty() {
            println!("{}", "Concert dates:".bold());
            println!("  {}", detail.concert_dates.join(", "));
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TerminalView {
    fn render_list(&mut self, artists: &[&Artist]) {
        self.cards = artists.iter().map(|a| Card::from_artist(a)).collect();
        self.detail = None;
        self.page = Page::List;
    }

    fn render_detail(&mut self, detail: &ArtistDetail) {
        self.detail = Some(detail.clone());
        self.page = Page::Detail;
    }

    fn render_error(&mut self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
        self.page = Page::Empty;
    }

    fn render_stats(&mut self, stats: &StatsDisplay) {
        self.stats = Some(stats.clone());
    }
}
