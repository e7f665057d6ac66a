//! Minimal regex router: routes are tried in registration order, the
//! first pattern that matches the path wins.

use regex::Regex;

pub struct RouteParser<R> {
    routes: Vec<(Regex, Box<Fn(Vec<&str>) -> Option<R>>)>,
}

impl<R> Default for RouteParser<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R> RouteParser<R> {
    /// Adds a route without parameters
    pub fn add_route<F>(&mut self, pattern: &str, f: F)
    where
        F: Fn() -> R + 'static,
    {
        self.add_route_with_params(pattern, move |_| Some(f()));
    }

    /// Adds a route whose capture groups are passed to `f`
    pub fn add_route_with_params<F>(&mut self, pattern: &str, f: F)
    where
        F: Fn(Vec<&str>) -> Option<R> + 'static,
    {
        let regex = Regex::new(pattern).expect("Invalid route pattern");
        self.routes.push((regex, Box::new(f)));
    }

    /// Tests a path against all registered routes
    pub fn test(&self, path: &str) -> Option<R> {
        self.routes
            .iter()
            .filter_map(|&(ref regex, ref f)| {
                regex.captures(path).and_then(|caps| {
                    let params = caps
                        .iter()
                        .skip(1)
                        .filter_map(|group| group.map(|m| m.as_str()))
                        .collect();
                    f(params)
                })
            })
            .next()
    }
}
