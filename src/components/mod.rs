//! UI Components
//!
//! Reusable Leptos components.

mod add_todo_modal;
mod delete_confirm_button;
mod edit_todo_modal;
mod filter_sidebar;
mod note_modal;
mod pagination;
mod todo_item;
mod todo_list;
mod user_switcher;

pub use add_todo_modal::AddTodoModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_todo_modal::EditTodoModal;
pub use filter_sidebar::FilterSidebar;
pub use note_modal::NoteModal;
pub use pagination::PaginationBar;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use user_switcher::UserSwitcher;
