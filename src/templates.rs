use std::path::Path;

use minijinja::{Source, Environment, Error, ErrorKind, Template};

#[derive(Debug)]
pub enum Lookup<'env> {
    Found(Template<'env>),
    Missing,
}

/// Application supplied error templates, e.g. `404.html` or `507.html`.
#[derive(Debug)]
pub struct ErrorTemplates {
    env: Environment<'static>,
}

impl ErrorTemplates {
    /// Loads templates lazily from `dir`, a lookup for `404.html` reads
    /// `dir/404.html`.
    pub fn from_dir<P>(dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        let mut env = Environment::new();
        env.set_source(Source::from_path(dir));

        Self { env }
    }

    pub fn from_templates<I, N, S>(templates: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut source = Source::new();

        for (name, contents) in templates {
            source.add_template(name, contents)?;
        }

        let mut env = Environment::new();
        env.set_source(source);

        Ok(Self { env })
    }

    pub fn empty() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Only a missing template is turned into [`Lookup::Missing`], any other
    /// engine error (syntax, IO) is returned as is.
    pub fn lookup(&self, name: &str) -> Result<Lookup<'_>, Error> {
        match self.env.get_template(name) {
            Ok(template) => Ok(Lookup::Found(template)),
            Err(error) if error.kind() == ErrorKind::TemplateNotFound => Ok(Lookup::Missing),
            Err(error) => Err(error),
        }
    }
}
