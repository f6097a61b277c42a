use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-10 bg-base-300 text-base-content">
            <nav class="grid grid-flow-col gap-4">
                <a class="link link-hover" href="#features">{"Features"}</a>
                <a class="link link-hover" href="#coverage">{"Coverage"}</a>
                <a class="link link-hover" href="#faq">{"FAQ"}</a>
            </nav>
            <nav>
                <div class="grid grid-flow-col gap-4 text-2xl">
                    <a href="https://github.com/reliefnet/reliefnet" target="_blank" rel="noopener" aria-label="GitHub">
                        <i class="fab fa-github"></i>
                    </a>
                    <a href="https://x.com/reliefnet" target="_blank" rel="noopener" aria-label="X">
                        <i class="fab fa-x-twitter"></i>
                    </a>
                    <a href="https://www.linkedin.com/company/reliefnet" target="_blank" rel="noopener" aria-label="LinkedIn">
                        <i class="fab fa-linkedin"></i>
                    </a>
                </div>
            </nav>
            <aside>
                <p>{"ReliefNet — Emergency Aid and Needs Coordination Network"}</p>
            </aside>
        </footer>
    }
}
