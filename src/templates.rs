use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::models::Movie;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn catalog_page(movies: &[Movie], is_admin: bool, query: &str) -> String {
    page(
        "Movies Collection",
        html! {
            div class="py-10" {
                div class="text-center mb-10" {
                    h1 class="text-4xl font-bold text-white mb-3" { "Movies Collection" }
                    p class="text-gray-300 max-w-xl mx-auto text-lg" { "Browse, search, and manage your favorite movies." }
                }

                div class="max-w-5xl mx-auto px-4" {
                    h2 class="text-2xl font-semibold text-white mb-8" { "Browse All Titles" }

                    form class="mb-8" method="get" action="/movies" id="search-form" {
                        input type="text" name="q" id="search"
                            placeholder="Search movies by title, actor, or year..."
                            class="w-full p-3 rounded-lg border border-gray-300 shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                            value=(query) autocomplete="off";
                    }

                    div id="movie-grid" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6" {
                        @for movie in movies {
                            (movie_card(movie, is_admin))
                        }
                    }

                    div id="empty-state"
                        class="text-center py-10 bg-gray-800 text-white rounded-xl shadow-md"
                        style=(if movies.is_empty() { "" } else { "display:none" }) {
                        h2 class="text-2xl font-bold mb-2" { "No movies found" }
                        p class="text-gray-300" { "Try adjusting your search criteria." }
                    }
                }
            }

            (delete_modal())
            script { (PreEscaped(CATALOG_JS)) }
        },
    )
}

fn movie_card(movie: &Movie, is_admin: bool) -> Markup {
    html! {
        div class="bg-white shadow-md rounded-2xl p-6 flex flex-col justify-between"
            data-movie-id=(movie.id)
            data-title=(movie.title.to_lowercase())
            data-actors=(movie.actors.join("\n").to_lowercase())
            data-year=(movie.release_year) {
            div {
                h2 class="text-2xl font-bold text-gray-800 mb-2" { (movie.title) }
                p class="text-gray-600 mb-4" { (movie.release_year) }
                h3 class="text-lg font-semibold text-gray-700 mb-2" { "Actors:" }
                ul class="list-disc pl-5 mb-4" {
                    @for actor in &movie.actors {
                        li class="text-gray-600" { (actor) }
                    }
                }
            }

            @if is_admin {
                div class="flex justify-end items-center mt-auto pt-4" {
                    button class="w-28 text-center px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 font-medium"
                        data-delete-id=(movie.id) data-delete-title=(movie.title) { "Delete" }
                }
            }
        }
    }
}

fn delete_modal() -> Markup {
    html! {
        div id="delete-modal" class="fixed inset-0 bg-black bg-opacity-50 items-center justify-center z-50 px-4" style="display:none" {
            div class="bg-white rounded-2xl p-8 w-full max-w-md shadow-xl" {
                h2 class="text-2xl font-bold text-gray-800 mb-4" { "Delete Movie" }
                p class="text-gray-700 mb-6" {
                    "Are you sure you want to delete \""
                    span class="font-semibold" id="delete-modal-title" {}
                    "\"? This action cannot be undone."
                }
                div id="delete-modal-error"
                    class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4"
                    style="display:none" {}
                div class="flex justify-end gap-4" {
                    button id="delete-cancel" class="px-4 py-2 rounded bg-gray-200 text-gray-800 hover:bg-gray-300" { "Cancel" }
                    button id="delete-confirm" class="px-4 py-2 rounded bg-red-600 text-white hover:bg-red-700" { "Delete" }
                }
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content="Browse our movie collection";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="bg-gray-900 min-h-screen" { (body) }
        }
    }
    .into_string()
}

// Client-side search filter and delete confirmation. The filter mirrors
// models::filter_movies; deletes remove the card locally only after the
// server confirms, with at most one request in flight per modal.
const CATALOG_JS: &str = r#"
(function () {
  var search = document.getElementById('search');
  var form = document.getElementById('search-form');
  var grid = document.getElementById('movie-grid');
  var empty = document.getElementById('empty-state');

  function applyFilter() {
    var term = search.value.trim().toLowerCase();
    var visible = 0;
    var cards = grid.querySelectorAll('[data-movie-id]');
    for (var i = 0; i < cards.length; i++) {
      var card = cards[i];
      var match = term === ''
        || card.dataset.title.indexOf(term) !== -1
        || card.dataset.actors.indexOf(term) !== -1
        || card.dataset.year.indexOf(term) !== -1;
      card.style.display = match ? '' : 'none';
      if (match) visible++;
    }
    empty.style.display = visible === 0 ? '' : 'none';
  }

  form.addEventListener('submit', function (e) { e.preventDefault(); });
  search.addEventListener('input', applyFilter);

  var modal = document.getElementById('delete-modal');
  var modalTitle = document.getElementById('delete-modal-title');
  var modalError = document.getElementById('delete-modal-error');
  var cancelBtn = document.getElementById('delete-cancel');
  var confirmBtn = document.getElementById('delete-confirm');
  var pendingId = null;
  var deleting = false;

  grid.addEventListener('click', function (e) {
    var btn = e.target.closest('[data-delete-id]');
    if (!btn) return;
    pendingId = btn.dataset.deleteId;
    modalTitle.textContent = btn.dataset.deleteTitle;
    modalError.style.display = 'none';
    modal.style.display = 'flex';
  });

  function closeModal() {
    modal.style.display = 'none';
    pendingId = null;
  }

  cancelBtn.addEventListener('click', function () {
    if (!deleting) closeModal();
  });

  confirmBtn.addEventListener('click', function () {
    if (deleting || !pendingId) return;
    deleting = true;
    cancelBtn.disabled = true;
    confirmBtn.disabled = true;
    confirmBtn.textContent = 'Deleting...';
    modalError.style.display = 'none';

    fetch('/api/movies/' + encodeURIComponent(pendingId), { method: 'DELETE' })
      .then(function (resp) {
        if (resp.ok) return null;
        return resp.json()
          .catch(function () { return {}; })
          .then(function (data) {
            throw new Error(data.message || 'Failed to delete movie');
          });
      })
      .then(function () {
        var card = grid.querySelector('[data-movie-id="' + pendingId + '"]');
        if (card) card.remove();
        applyFilter();
        closeModal();
      })
      .catch(function (err) {
        modalError.textContent = err.message;
        modalError.style.display = '';
      })
      .then(function () {
        deleting = false;
        cancelBtn.disabled = false;
        confirmBtn.disabled = false;
        confirmBtn.textContent = 'Delete';
      });
  });
})();
"#;
