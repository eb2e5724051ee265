//! The article dataset: a fixed, ordered collection of records.
//!
//! Records are identified by their position in the collection, which is
//! stable for the process lifetime. The built-in dataset ships nine short
//! articles; `--records` swaps in a JSON file at startup, after which the
//! collection is just as immutable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One article entry. Dates are opaque display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub description: String,
    pub date: String,
}

/// Errors raised while loading a records file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read records file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse records file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("records file {path} contains no records")]
    Empty { path: PathBuf },
}

/// Load a dataset from a JSON array of records.
pub fn load(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> =
        serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

/// The built-in nine-article dataset.
pub fn builtin() -> Vec<Record> {
    fn record(title: &str, description: &str, date: &str) -> Record {
        Record {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        }
    }

    vec![
        record(
            "Introduction to React",
            "React is a JavaScript library for building user interfaces. It allows \
             developers to build single-page applications with a component-based \
             architecture. React promotes the use of reusable components and provides \
             a virtual DOM to optimize performance.",
            "2024-01-15",
        ),
        record(
            "Understanding Components",
            "Components are the building blocks of React applications. They let you \
             split the UI into independent, reusable pieces that can be managed \
             separately. Components can be class-based or functional, and they \
             encapsulate their own state and behavior.",
            "2024-02-20",
        ),
        record(
            "Props and State",
            "Props are used to pass data from parent to child components, while state \
             is used to manage data within a component. Props are immutable and allow \
             components to be reusable, while state is mutable and managed within the \
             component.",
            "2024-03-05",
        ),
        record(
            "React's Virtual DOM",
            "React uses a virtual DOM to optimize performance. It minimizes the number \
             of direct DOM manipulations by using a lightweight virtual representation \
             of the real DOM. This approach enhances the efficiency of rendering \
             updates.",
            "2024-04-10",
        ),
        record(
            "Lifecycle Methods",
            "Lifecycle methods are hooks that allow you to run code at specific points \
             in a component's life. They are essential for managing side effects, such \
             as data fetching or subscriptions, and optimizing performance by \
             controlling component updates.",
            "2024-05-25",
        ),
        record(
            "React Hooks Overview",
            "React hooks are functions that let you use state and other React features \
             without writing a class. Hooks like useState and useEffect simplify the \
             process of managing state and side effects in functional components.",
            "2024-06-15",
        ),
        record(
            "Handling Events",
            "Event handling in React involves attaching event handlers to elements. \
             React provides a consistent way to handle events across different \
             browsers, and you can use synthetic events to manage user interactions \
             effectively.",
            "2024-07-20",
        ),
        record(
            "Context API",
            "The Context API provides a way to pass data through the component tree \
             without having to pass props down manually at every level. It\u{2019}s useful \
             for managing global state and avoiding prop drilling in React \
             applications.",
            "2024-08-10",
        ),
        record(
            "React Router",
            "React Router is a library for routing in React applications. It enables \
             navigation between different views or pages within a single-page \
             application and supports dynamic routing and URL parameters.",
            "2024-09-05",
        ),
    ]
}
