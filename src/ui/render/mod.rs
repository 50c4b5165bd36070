mod all;
mod filter_panel;
mod footer;
mod header;
mod job_detail;
mod job_list;
mod log;
mod pagination;

use self::log::log;
use super::*;
use filter_panel::filter_panel;
use footer::footer;
use header::header;
use job_detail::job_detail;
use job_list::job_list;

pub use all::all as render;
