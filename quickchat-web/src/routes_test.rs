//! Tests for the routing system
//!
//! Validates route definitions and URL handling for the application's
//! routing infrastructure.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests route enum variants
    #[test]
    fn test_route_variants() {
        let home = MainRoute::Home;
        let login = MainRoute::Login;
        let not_found = MainRoute::NotFound;

        assert!(format!("{home:?}").contains("Home"));
        assert!(format!("{login:?}").contains("Login"));
        assert!(format!("{not_found:?}").contains("NotFound"));
    }

    /// Tests route path rendering
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests path recognition for known routes
    #[test]
    fn test_recognizes_known_paths() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
    }

    /// Tests the not-found fallback
    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        assert_eq!(MainRoute::recognize("/nope"), Some(MainRoute::NotFound));
    }

    /// Tests that every route round-trips through its own path
    #[test]
    fn test_every_route_round_trips() {
        for route in MainRoute::iter() {
            assert_eq!(MainRoute::recognize(&route.to_path()), Some(route));
        }
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality_and_cloning() {
        let route = MainRoute::Login;
        let cloned = route.clone();
        assert_eq!(route, cloned);
        assert_ne!(MainRoute::Home, MainRoute::Login);
    }
}
