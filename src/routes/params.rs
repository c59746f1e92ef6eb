use serde::Deserialize;
use utoipa::ToSchema;

/// Query parameters of `GET /movies/filter`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub search_type: String,
    pub search_text: String,
}

/// The closed set of movie attributes a filter may target. Anything outside
/// this list is rejected before a query is built, so caller text never
/// reaches the SQL column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum FilterAttribute {
    Genre,
    Title,
    Description,
    ImdbCode,
    Year,
}

impl FilterAttribute {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "genre" => Some(FilterAttribute::Genre),
            "title" => Some(FilterAttribute::Title),
            "description" => Some(FilterAttribute::Description),
            "imdbCode" => Some(FilterAttribute::ImdbCode),
            "year" => Some(FilterAttribute::Year),
            _ => None,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            FilterAttribute::Genre => "genre",
            FilterAttribute::Title => "title",
            FilterAttribute::Description => "description",
            FilterAttribute::ImdbCode => "imdb_code",
            FilterAttribute::Year => "release_year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_allowed_attribute() {
        assert_eq!(FilterAttribute::parse("genre"), Some(FilterAttribute::Genre));
        assert_eq!(FilterAttribute::parse("title"), Some(FilterAttribute::Title));
        assert_eq!(
            FilterAttribute::parse("description"),
            Some(FilterAttribute::Description)
        );
        assert_eq!(
            FilterAttribute::parse("imdbCode"),
            Some(FilterAttribute::ImdbCode)
        );
        assert_eq!(FilterAttribute::parse("year"), Some(FilterAttribute::Year));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(FilterAttribute::parse(""), None);
        assert_eq!(FilterAttribute::parse("imdb_code"), None);
        assert_eq!(FilterAttribute::parse("GENRE"), None);
        assert_eq!(FilterAttribute::parse("id; DROP TABLE movies"), None);
    }

    #[test]
    fn maps_attributes_to_their_columns() {
        assert_eq!(FilterAttribute::ImdbCode.as_column(), "imdb_code");
        assert_eq!(FilterAttribute::Year.as_column(), "release_year");
        assert_eq!(FilterAttribute::Genre.as_column(), "genre");
    }
}
