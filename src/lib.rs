/*!
# MaryPy Cannabis Directory

A browser dashboard over a CSV of cannabis strains, built in Rust.

## Overview

The server reads one CSV file at startup, keeps four columns of it and
serves the result as a paginated, sortable, searchable table. The table is
loaded once and never changes; every user interaction derives a new view
from it.

## Architecture

### Frontend Layer
- **Technologies**: HTML, CSS, plain JavaScript
- **Key Components**:
  - Table - Shows one page (10 rows by default) of the current view
  - Sort controls - Name/Rating radio buttons and an ascending/descending dropdown
  - Search box - Case-insensitive name search
  - Export links - Download the current view as CSV or XLSX

### Backend Layer
- **Technologies**: Rust, axum
- **Core Components**:
  - Loader - Reads the CSV, keeps `Name`, `Rating`, `THC%` and `Type`,
    and turns `THC%` text such as `"18%"` into the integer `18`
  - Query - Stable sort by a validated key, substring filter, pagination
  - Downloader - CSV and XLSX export of a view

## Modules

- **strain**: `StrainRecord`, the `Column` names and sort directions
- **loader**: CSV loading and cleaning
- **query**: Sorting, filtering and paginated views
- **downloader**: Export functionality (CSV, XLSX)
- **config**: Environment and argument configuration
- **app**: Routing and handlers
- **error**: Error types

## REST API Endpoints

- `/` - The dashboard page
- `/api/strains` - One page of the sorted and filtered table
- `/api/search` - Records whose column contains a term
- `/api/columns` - The displayed column names
- `/api/export.csv`, `/api/export.xlsx` - The whole current view as a download
- `/health` - Liveness and record count
*/

pub mod config;
pub mod downloader;
pub mod error;
pub mod loader;
pub mod query;
pub mod strain;

#[cfg(feature = "web")]
pub mod app;

pub use error::*;
pub use loader::{StrainTable, load_strains};
pub use strain::{Column, SortOrder, StrainRecord};
