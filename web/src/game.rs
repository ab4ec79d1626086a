use crate::api::HttpClueSource;
use crate::utils::*;
use clap::Args;
use jeopardy_core as game;
use jeopardy_protocol::DEFAULT_API_BASE;
use std::rc::Rc;
use yew::prelude::*;

const HIDDEN_LABEL: &str = "?";

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of category columns on the board
    #[arg(long, default_value_t = 6)]
    categories: game::Coord,

    /// Number of clue rows on the board
    #[arg(long, default_value_t = 5)]
    clues: game::Coord,

    /// How many categories to list before picking at random
    #[arg(long, default_value_t = 100)]
    pool: u16,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api: String,
}

impl GameProps {
    pub(crate) fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.categories, self.clues, self.pool)
    }

    pub(crate) fn fixed_seed(&self) -> Option<u64> {
        self.seed.as_deref().map(seed_from_text)
    }
}

pub(crate) enum Msg {
    Start,
    Built {
        generation: u32,
        result: game::Result<game::Board>,
    },
    Reset,
    CellClick(game::Coord2),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    category: game::Coord,
    clue: game::Coord,
    state: game::RevealState,
    label: AttrValue,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use game::RevealState::*;

    let CellProps {
        category,
        clue,
        state,
        label,
        callback,
    } = props.clone();
    let class = classes!(
        "cell",
        match state {
            Hidden => classes!("hidden"),
            ShowingQuestion => classes!("question"),
            ShowingAnswer => classes!("answer"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", category, clue);
        callback.emit((category, clue));
    });

    html! {
        <td id={format!("{category}-{clue}")} {class} {onclick}>{label}</td>
    }
}

fn cell_label(board: &game::Board, coords: game::Coord2) -> AttrValue {
    board
        .display_at(coords)
        .map_or(AttrValue::from(HIDDEN_LABEL), |text| {
            AttrValue::from(text.to_string())
        })
}

fn progress_label(board: &game::Board) -> String {
    if board.is_complete() {
        "Board cleared!".to_string()
    } else {
        format!("{} / {} answered", board.answered_count(), board.total_cells())
    }
}

const fn start_label(played: bool) -> &'static str {
    if played { "Restart" } else { "Start" }
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: game::GameConfig,
    source: Rc<HttpClueSource>,
    fixed_seed: Option<u64>,
    board: Option<game::Board>,
    error: Option<game::TriviaError>,
    loading: bool,
    played: bool,
    generation: u32,
    in_flight: Option<game::CancelToken>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.fixed_seed.unwrap_or_else(js_random_seed)
    }

    fn start(&mut self, ctx: &Context<Self>) {
        if let Some(cancel) = self.in_flight.take() {
            log::debug!("cancelling build {}", self.generation);
            cancel.cancel();
        }
        if let Some(board) = self.board.as_mut() {
            board.clear();
        }

        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.error = None;

        let generation = self.generation;
        let cancel = game::CancelToken::new();
        self.in_flight = Some(cancel.clone());
        let builder = game::BoardBuilder::new(self.config, self.next_seed());
        let source = Rc::clone(&self.source);
        log::debug!("starting build {} with {:?}", generation, self.config);
        ctx.link().send_future(async move {
            let result = builder.build(source.as_ref(), &cancel).await;
            Msg::Built { generation, result }
        });
    }

    fn finish(&mut self, generation: u32, result: game::Result<game::Board>) -> bool {
        if generation != self.generation {
            log::debug!("discarding stale build {}: {:?}", generation, result.err());
            return false;
        }

        self.in_flight = None;
        self.loading = false;
        match result {
            Ok(board) => {
                log::info!("board ready: {:?}", board.size());
                self.board = Some(board);
                self.played = true;
            }
            Err(err) => {
                log::error!("could not build board: {}", err);
                self.board = None;
                self.error = Some(err);
            }
        }
        true
    }

    fn click(&mut self, coords: game::Coord2) -> bool {
        if self.loading {
            return false;
        }
        self.board
            .as_mut()
            .is_some_and(|board| board.on_click(coords).has_update())
    }

    fn view_board(&self, ctx: &Context<Self>, board: &game::Board) -> Html {
        let (cols, rows) = board.size();

        html! {
            <table id="jeopardy">
                <thead>
                    <tr class="header-row">
                        { for board.titles().map(|title| html! { <th>{title.to_string()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..rows).map(|clue| html! {
                            <tr class="body-row">
                                {
                                    for (0..cols).map(|category| {
                                        let coords = (category, clue);
                                        let state = board.state_at(coords).unwrap_or_default();
                                        let label = cell_label(board, coords);
                                        let callback = ctx.link().callback(Msg::CellClick);
                                        html! {
                                            <CellView {category} {clue} {state} {label} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            config: props.game_config(),
            source: Rc::new(HttpClueSource::new(&props.api)),
            fixed_seed: props.fixed_seed(),
            board: None,
            error: None,
            loading: false,
            played: false,
            generation: 0,
            in_flight: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.start(ctx);
                true
            }
            Built { generation, result } => self.finish(generation, result),
            Reset => self.board.as_mut().is_some_and(|board| {
                let had_progress = board.revealed_count() > 0;
                board.clear();
                had_progress
            }),
            CellClick(coords) => self.click(coords),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Start
        });
        let cb_reset = ctx.link().callback(|_| Reset);
        let board = self.board.as_ref().filter(|_| !self.loading);

        html! {
            <div class="container">
                <nav>
                    <button class="start" onclick={cb_start}>{start_label(self.played)}</button>
                    if let Some(board) = board {
                        <>
                            <button class="reset" onclick={cb_reset}>{"Reset"}</button>
                            <aside>{progress_label(board)}</aside>
                        </>
                    }
                </nav>
                if let Some(err) = &self.error {
                    <p class="error" role="alert">{err.to_string()}</p>
                }
                if self.loading {
                    <div id="loading" aria-busy="true">{"Loading…"}</div>
                } else if let Some(board) = board {
                    {self.view_board(ctx, board)}
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> game::Board {
        let clues = vec![
            game::Clue::new("Hamlet author", "Shakespeare"),
            game::Clue::new("Bell Jar author", "Plath"),
        ];
        game::Board::new(vec![game::Category::new("Literature", clues)], 2).unwrap()
    }

    #[test]
    fn cell_labels_follow_reveal_state() {
        let mut board = board();
        assert_eq!(cell_label(&board, (0, 1)), AttrValue::from(HIDDEN_LABEL));

        board.on_click((0, 1));
        assert_eq!(cell_label(&board, (0, 1)), AttrValue::from("Bell Jar author"));

        board.on_click((0, 1));
        assert_eq!(cell_label(&board, (0, 1)), AttrValue::from("Plath"));
        assert_eq!(cell_label(&board, (0, 0)), AttrValue::from(HIDDEN_LABEL));
    }

    #[test]
    fn progress_counts_answers_until_cleared() {
        let mut board = board();
        assert_eq!(progress_label(&board), "0 / 2 answered");

        for coords in [(0, 0), (0, 0), (0, 1), (0, 1)] {
            board.on_click(coords);
        }
        assert_eq!(progress_label(&board), "Board cleared!");

        board.clear();
        assert_eq!(progress_label(&board), "0 / 2 answered");
    }

    fn building_view(generation: u32) -> GameView {
        GameView {
            config: game::GameConfig::new(1, 2, 1),
            source: Rc::new(HttpClueSource::new("http://localhost")),
            fixed_seed: Some(1),
            board: None,
            error: None,
            loading: true,
            played: false,
            generation,
            in_flight: Some(game::CancelToken::new()),
        }
    }

    #[test]
    fn stale_build_is_discarded() {
        let mut view = building_view(2);

        assert!(!view.finish(1, Ok(board())));
        assert!(view.board.is_none());
        assert!(view.loading);
        assert!(!view.played);
        assert!(view.in_flight.is_some());

        assert!(!view.finish(1, Err(game::TriviaError::Cancelled)));
        assert!(view.error.is_none());
        assert!(view.loading);
    }

    #[test]
    fn current_build_installs_board() {
        let mut view = building_view(3);

        assert!(view.finish(3, Ok(board())));
        assert_eq!(view.board, Some(board()));
        assert!(view.played);
        assert!(!view.loading);
        assert!(view.in_flight.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn failed_build_shows_error_and_drops_board() {
        let mut view = building_view(1);
        view.board = Some(board());
        let err = game::TriviaError::Network("status 503".into());

        assert!(view.finish(1, Err(err.clone())));
        assert!(view.board.is_none());
        assert_eq!(view.error, Some(err));
        assert!(!view.loading);
        assert!(!view.played);
        assert!(view.in_flight.is_none());
    }

    #[test]
    fn clicks_are_ignored_while_loading() {
        let mut view = building_view(1);
        view.board = Some(board());

        assert!(!view.click((0, 0)));
        assert_eq!(view.board.as_ref().map(|b| b.revealed_count()), Some(0));

        view.loading = false;
        assert!(view.click((0, 0)));
        assert!(!view.click((5, 5)));
    }

    #[test]
    fn start_button_turns_into_restart() {
        assert_eq!(start_label(false), "Start");
        assert_eq!(start_label(true), "Restart");
    }
}
