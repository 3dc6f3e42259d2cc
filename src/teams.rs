/// Default hex colors for the 30 clubs, keyed by abbreviation. A user color
/// table is merged over this one, so overriding a single entry is enough.
pub const DEFAULT_TEAM_COLORS: &[(&str, &str)] = &[
    ("ARI", "#A71930"),
    ("ATL", "#CE1141"),
    ("BAL", "#DF4601"),
    ("BOS", "#BD3039"),
    ("CHC", "#004EC1"),
    ("CIN", "#C6011F"),
    ("CLE", "#E31937"),
    ("COL", "#5E5EB6"),
    ("CWS", "#DADADA"),
    ("DET", "#FF6600"),
    ("HOU", "#EB6E1F"),
    ("KC", "#0046DD"),
    ("LAA", "#BA0021"),
    ("LAD", "#005A9C"),
    ("MIA", "#00A3E0"),
    ("MIL", "#0747CC"),
    ("MIN", "#D31145"),
    ("NYY", "#0747CC"),
    ("NYM", "#FF5910"),
    ("OAK", "#006659"),
    ("PHI", "#E81828"),
    ("PIT", "#FFCC01"),
    ("SD", "#FFC425"),
    ("SEA", "#2E8B90"),
    ("SF", "#FD5A1E"),
    ("STL", "#B53B30"),
    ("TB", "#8FBCE6"),
    ("TEX", "#C0111F"),
    ("TOR", "#0046DD"),
    ("WSH", "#C70003"),
];

pub fn is_valid_team(abbreviation: &str) -> bool {
    DEFAULT_TEAM_COLORS.iter().any(|(team, _)| *team == abbreviation)
}

pub fn default_color(abbreviation: &str) -> Option<&'static str> {
    DEFAULT_TEAM_COLORS
        .iter()
        .find(|(team, _)| *team == abbreviation)
        .map(|(_, color)| *color)
}
