use cine_core::model::Movie;
use cine_core::Catalog;

#[allow(dead_code)]
pub fn movie(
    title: &str,
    director: &str,
    stars: &[&str],
    genre: &str,
    year: Option<i32>,
    rating: Option<f64>,
    votes: u64,
    gross: Option<&str>,
) -> Movie {
    Movie {
        title: title.to_string(),
        director: director.to_string(),
        stars: stars.iter().map(|s| s.to_string()).collect(),
        genre: genre.to_string(),
        year,
        rating,
        votes,
        gross: gross.map(str::to_string),
        overview: None,
        poster_link: None,
        runtime: None,
    }
}

/// Small catalog with the collision cases the resolver has to handle: two
/// directors sharing a surname, an actor appearing in several entries, a
/// gross value that does not parse.
#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    Catalog::from_entries(vec![
        movie(
            "Inception",
            "Christopher Nolan",
            &["Leonardo DiCaprio", "Joseph Gordon-Levitt"],
            "Action, Adventure, Sci-Fi",
            Some(2010),
            Some(8.8),
            2_067_042,
            Some("292,576,195"),
        ),
        movie(
            "The Prestige",
            "Christopher Nolan",
            &["Christian Bale", "Hugh Jackman"],
            "Drama, Mystery, Sci-Fi",
            Some(2006),
            Some(8.5),
            1_190_259,
            Some("53,089,891"),
        ),
        movie(
            "Westworld",
            "Jonathan Nolan",
            &["Evan Rachel Wood", "Thandiwe Newton"],
            "Drama, Mystery, Sci-Fi",
            Some(2016),
            Some(8.5),
            1_125_712,
            Some("25,544,867"),
        ),
        movie(
            "Pulp Fiction",
            "Quentin Tarantino",
            &["John Travolta", "Uma Thurman", "Samuel L. Jackson"],
            "Crime, Drama",
            Some(1994),
            Some(8.9),
            1_826_188,
            Some("107,928,762"),
        ),
        movie(
            "The Terminal",
            "Steven Spielberg",
            &["Tom Hanks", "Catherine Zeta-Jones"],
            "Comedy, Drama, Romance",
            Some(2004),
            Some(7.4),
            451_972,
            Some("77,872,883"),
        ),
        movie(
            "Cast Away",
            "Robert Zemeckis",
            &["Tom Hanks", "Helen Hunt"],
            "Adventure, Drama, Romance",
            Some(2000),
            Some(7.8),
            553_181,
            Some("233,632,142"),
        ),
        movie(
            "Seven Samurai",
            "Akira Kurosawa",
            &["Toshiro Mifune", "Takashi Shimura"],
            "Action, Drama",
            Some(1954),
            Some(8.6),
            315_744,
            Some("N/A"),
        ),
    ])
}
