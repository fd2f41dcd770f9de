use leptos::*;

#[component]
pub fn HeroPanel() -> impl IntoView {
    view! {
        <div class="hidden lg:flex flex-1 relative overflow-hidden bg-blue-900">
            <div
                class="absolute inset-0 w-full h-full z-20 bg-cover bg-center bg-no-repeat"
                style="background-image: url('/images/signinimg.jpg')"
            ></div>
            <div class="absolute inset-0 bg-black bg-opacity-20 z-10"></div>
            <div class="relative z-20 flex flex-col justify-center items-start p-12 text-white">
                <h1 class="text-4xl font-bold mb-6 leading-tight">"HR Management Platform"</h1>
                <p class="text-xl text-blue-100 mb-8 leading-relaxed">
                    "Manage all employees, payrolls, and other human resource operations."
                </p>
            </div>
            <div class="absolute bottom-0 right-0 w-full h-full bg-gradient-to-t from-blue-900 to-transparent opacity-50 z-10"></div>
        </div>
    }
}
