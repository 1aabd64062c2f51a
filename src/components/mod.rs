//! UI Components
//!
//! Leptos components for the todo page.

mod page_header;
mod todo_list;
mod todo_list_item;
mod todo_details;

pub use page_header::PageHeader;
pub use todo_list::TodoList;
pub use todo_list_item::TodoListItem;
pub use todo_details::TodoDetails;
