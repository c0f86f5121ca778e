//! Artist fixtures shared by the unit tests.

use catalog::Artist;

/// A minimal artist; tests adjust the fields they care about.
pub fn artist(id: u32, name: &str, members: &[&str]) -> Artist {
    Artist {
        id,
        image: String::new(),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        creation_date: 1970,
        first_album: "01-01-1972".to_string(),
        first_album_year: 1972,
        locations: Vec::new(),
        dates_locations: Default::default(),
    }
}

pub fn queen() -> Artist {
    let mut queen = artist(
        1,
        "Queen",
        &["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"],
    );
    queen.first_album = "14-12-1973".to_string();
    queen.first_album_year = 1973;
    queen.locations = vec!["london-uk".to_string()];
    queen
}
